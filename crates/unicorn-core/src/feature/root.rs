// ── Root ──
//
// Tab selector over the list and contact units. Child actions are
// forwarded untouched.

use super::contact::{ContactAction, ContactReducer, ContactState};
use super::list::{ListAction, ListReducer, ListState};
use crate::effect::Effect;
use crate::reducer::Reducer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Tab {
    #[default]
    Unicorns,
    Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub selected: Tab,
    pub unicorns: ListState,
    pub contact: ContactState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootAction {
    Select(Tab),
    Unicorns(ListAction),
    Contact(ContactAction),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = RootState;
    type Action = RootAction;

    fn reduce(&self, state: &mut RootState, action: RootAction) -> Effect<RootAction> {
        match action {
            RootAction::Select(tab) => {
                state.selected = tab;
                Effect::none()
            }
            RootAction::Unicorns(action) => ListReducer
                .reduce(&mut state.unicorns, action)
                .map(RootAction::Unicorns),
            RootAction::Contact(action) => ContactReducer
                .reduce(&mut state.contact, action)
                .map(RootAction::Contact),
        }
    }
}
