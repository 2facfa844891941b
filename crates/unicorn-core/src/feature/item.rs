// ── List cell ──

use uuid::Uuid;

use crate::effect::Effect;
use crate::model::Unicorn;
use crate::reducer::Reducer;

/// One entry of the unicorn list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicornItem {
    pub id: Uuid,
    pub item: Unicorn,
}

impl From<Unicorn> for UnicornItem {
    fn from(item: Unicorn) -> Self {
        Self { id: item.id, item }
    }
}

/// Cell interactions. None exist yet; the list already routes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {}

#[derive(Debug, Default, Clone, Copy)]
pub struct ItemReducer;

impl Reducer for ItemReducer {
    type State = UnicornItem;
    type Action = ItemAction;

    fn reduce(&self, _state: &mut UnicornItem, action: ItemAction) -> Effect<ItemAction> {
        match action {}
    }
}
