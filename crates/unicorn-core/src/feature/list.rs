// ── Unicorn list ──
//
// The coordination core. Owns the fetch lifecycle, the add sheet and the
// detail selection, and watches child outcomes to decide when to close
// them and reload. Local state is always mutated before the reload is
// emitted. Every presentation of a child gets a fresh `Session`, so a
// result from a sheet or detail that was closed and replaced never drives
// the one that is open now.

use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use super::add::{AddAction, AddReducer, AddState};
use super::detail::{DetailAction, DetailReducer, DetailState};
use super::item::{ItemAction, ItemReducer, UnicornItem};
use super::Session;
use crate::alert::{self, AlertAction, AlertState};
use crate::effect::Effect;
use crate::error::UnicornError;
use crate::model::Unicorn;
use crate::reducer::{Reducer, succeeded};

/// The unicorn currently shown in detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: Uuid,
    pub detail: DetailState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Keyed by unicorn id, in the order the backend returned them.
    pub items: IndexMap<Uuid, UnicornItem>,
    pub loading: bool,
    pub is_add_unicorn_presented: bool,
    /// Allocated on first presentation and kept after dismissal.
    pub add: Option<AddState>,
    pub selection: Option<Selection>,
    pub alert: Option<AlertState>,
    /// The most recent session handed to a child.
    pub session: Session,
}

impl ListState {
    pub fn unicorns(&self) -> impl Iterator<Item = &Unicorn> {
        self.items.values().map(|item| &item.item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Item { id: Uuid, action: ItemAction },
    Fetch,
    FetchResponse(Result<Vec<Unicorn>, UnicornError>),
    ShowAddUnicorn(bool),
    AddUnicorn(AddAction),
    /// `None` or an id not in `items` clears the selection.
    ShowUnicornDetail(Option<Uuid>),
    UnicornDetail(DetailAction),
    Alert(AlertAction),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListReducer;

impl ListReducer {
    fn add(state: &mut ListState, action: AddAction) -> Effect<ListAction> {
        let Some(add) = state.add.as_mut() else {
            debug!(?action, "add sheet not allocated, dropping action");
            return Effect::none();
        };

        let closes = matches!(action, AddAction::Close);
        let saved = matches!(
            &action,
            AddAction::SaveResponse { session, response }
                if *session == add.session && succeeded(response)
        );

        let effect = AddReducer.reduce(add, action).map(ListAction::AddUnicorn);

        if closes {
            state.is_add_unicorn_presented = false;
            return effect;
        }
        if saved {
            state.is_add_unicorn_presented = false;
            return Effect::merge([effect, Effect::send(ListAction::Fetch)]);
        }
        effect
    }

    fn detail(state: &mut ListState, action: DetailAction) -> Effect<ListAction> {
        let Some(selection) = state.selection.as_mut() else {
            debug!(?action, "no unicorn selected, dropping detail action");
            return Effect::none();
        };

        let done = match &action {
            DetailAction::SaveResponse { session, response }
            | DetailAction::DeleteResponse { session, response } => {
                *session == selection.detail.session && succeeded(response)
            }
            _ => false,
        };

        let effect = DetailReducer
            .reduce(&mut selection.detail, action)
            .map(ListAction::UnicornDetail);

        if done {
            state.selection = None;
            return Effect::merge([effect, Effect::send(ListAction::Fetch)]);
        }
        effect
    }
}

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;

    fn reduce(&self, state: &mut ListState, action: ListAction) -> Effect<ListAction> {
        match action {
            ListAction::Item { id, action } => match state.items.get_mut(&id) {
                Some(item) => ItemReducer
                    .reduce(item, action)
                    .map(|never: ItemAction| match never {}),
                None => Effect::none(),
            },

            ListAction::Fetch => {
                state.loading = true;
                Effect::run("fetch_unicorns", |env| async move {
                    ListAction::FetchResponse(env.unicorns.get_all().await)
                })
            }

            ListAction::FetchResponse(response) => {
                state.loading = false;
                match response {
                    Ok(unicorns) => {
                        debug!(count = unicorns.len(), "unicorns loaded");
                        state.items = unicorns
                            .into_iter()
                            .map(|unicorn| (unicorn.id, UnicornItem::from(unicorn)))
                            .collect();
                    }
                    Err(error) => alert::present(&mut state.alert, &error),
                }
                Effect::none()
            }

            ListAction::ShowAddUnicorn(presented) => {
                state.is_add_unicorn_presented = presented;
                if presented {
                    state.session = state.session.next();
                    state.add = Some(AddState::new(state.session));
                }
                Effect::none()
            }

            ListAction::AddUnicorn(action) => Self::add(state, action),

            ListAction::ShowUnicornDetail(id) => {
                let target = id.and_then(|id| state.items.get(&id).map(|item| item.item.clone()));
                state.selection = target.map(|unicorn| {
                    state.session = state.session.next();
                    Selection {
                        id: unicorn.id,
                        detail: DetailState::new(state.session, unicorn),
                    }
                });
                Effect::none()
            }

            ListAction::UnicornDetail(action) => Self::detail(state, action),

            ListAction::Alert(action) => {
                alert::reduce(&mut state.alert, action);
                Effect::none()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::alert::translate;
    use crate::model::Flavour;
    use pretty_assertions::assert_eq;

    fn reduce(state: &mut ListState, action: ListAction) -> Effect<ListAction> {
        ListReducer.reduce(state, action)
    }

    fn loaded(unicorns: Vec<Unicorn>) -> ListState {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::FetchResponse(Ok(unicorns)));
        state
    }

    fn names(state: &ListState) -> Vec<&str> {
        state.unicorns().map(|u| u.name.as_str()).collect()
    }

    /// A save result addressed to the open sheet.
    fn add_response(state: &ListState, response: Result<bool, UnicornError>) -> ListAction {
        let session = state.add.as_ref().map_or_else(Session::default, |add| add.session);
        ListAction::AddUnicorn(AddAction::SaveResponse { session, response })
    }

    fn detail_session(state: &ListState) -> Session {
        state
            .selection
            .as_ref()
            .map_or_else(Session::default, |s| s.detail.session)
    }

    // ── Fetch ──────────────────────────────────────────────────────

    #[test]
    fn fetch_sets_loading_and_starts_request() {
        let mut state = ListState::default();
        let effect = reduce(&mut state, ListAction::Fetch);
        assert!(state.loading);
        assert_eq!(effect.task_names(), vec!["fetch_unicorns"]);
    }

    #[test]
    fn fetch_response_keeps_backend_order() {
        let mut state = ListState {
            loading: true,
            ..ListState::default()
        };
        let _ = reduce(
            &mut state,
            ListAction::FetchResponse(Ok(vec![Unicorn::cassiopeia(), Unicorn::hippolyta()])),
        );
        assert!(!state.loading);
        let ids: Vec<_> = state.items.keys().copied().collect();
        assert_eq!(ids, vec![Unicorn::cassiopeia().id, Unicorn::hippolyta().id]);
    }

    #[test]
    fn fetch_response_replaces_items() {
        let mut state = loaded(vec![Unicorn::cassiopeia(), Unicorn::hippolyta()]);
        let _ = reduce(&mut state, ListAction::FetchResponse(Ok(vec![Unicorn::zephyra()])));
        assert_eq!(names(&state), vec!["Zephyra"]);
    }

    #[test]
    fn fetch_failure_keeps_items_and_alerts() {
        let mut state = loaded(Unicorn::samples());
        state.loading = true;
        let _ = reduce(&mut state, ListAction::FetchResponse(Err(UnicornError::Fetch)));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.alert, Some(translate(&UnicornError::Fetch)));
    }

    #[test]
    fn dismissing_list_alert_twice() {
        let mut state = ListState {
            alert: Some(translate(&UnicornError::Fetch)),
            ..ListState::default()
        };
        let _ = reduce(&mut state, ListAction::Alert(AlertAction::Dismiss));
        let _ = reduce(&mut state, ListAction::Alert(AlertAction::Dismiss));
        assert_eq!(state.alert, None);
    }

    // ── Add sheet ──────────────────────────────────────────────────

    #[test]
    fn presenting_add_resets_scratch_state() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let _ = reduce(
            &mut state,
            ListAction::AddUnicorn(AddAction::NameChanged("Aria".into())),
        );
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(false));
        assert!(!state.is_add_unicorn_presented);
        assert_eq!(state.add.as_ref().unwrap().name, "Aria");

        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        assert!(state.is_add_unicorn_presented);
        assert_eq!(state.add, Some(AddState::new(state.session)));
    }

    #[test]
    fn stale_add_success_does_not_close_reopened_sheet() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let _ = reduce(&mut state, ListAction::AddUnicorn(AddAction::Save));
        let first = add_response(&state, Ok(true));
        let _ = reduce(&mut state, ListAction::AddUnicorn(AddAction::Close));

        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let _ = reduce(
            &mut state,
            ListAction::AddUnicorn(AddAction::NameChanged("Bella".into())),
        );
        let effect = reduce(&mut state, first);

        assert!(effect.is_none());
        assert!(state.is_add_unicorn_presented);
        assert_eq!(state.add.as_ref().unwrap().name, "Bella");
    }

    #[test]
    fn response_for_hidden_sheet_still_lands() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let _ = reduce(&mut state, ListAction::AddUnicorn(AddAction::Save));
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(false));

        let response = add_response(&state, Ok(true));
        let effect = reduce(&mut state, response);
        assert!(!state.add.as_ref().unwrap().loading);
        assert_eq!(effect.actions(), vec![&ListAction::Fetch]);
    }

    #[test]
    fn add_close_dismisses_without_reload() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let effect = reduce(&mut state, ListAction::AddUnicorn(AddAction::Close));
        assert!(!state.is_add_unicorn_presented);
        assert!(effect.is_none());
    }

    #[test]
    fn add_success_dismisses_and_reloads_once() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let _ = reduce(
            &mut state,
            ListAction::AddUnicorn(AddAction::FlavourChanged(Flavour::Blue)),
        );
        let _ = reduce(&mut state, ListAction::AddUnicorn(AddAction::Save));

        let response = add_response(&state, Ok(true));
        let effect = reduce(&mut state, response);

        assert!(!state.is_add_unicorn_presented);
        assert!(!state.add.as_ref().unwrap().loading);
        assert_eq!(effect.actions(), vec![&ListAction::Fetch]);
        assert!(effect.task_names().is_empty());
    }

    #[test]
    fn add_failure_keeps_sheet_open() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let _ = reduce(&mut state, ListAction::AddUnicorn(AddAction::Save));
        let response = add_response(&state, Err(UnicornError::Add));
        let effect = reduce(&mut state, response);

        assert!(effect.is_none());
        assert!(state.is_add_unicorn_presented);
        let add = state.add.as_ref().unwrap();
        assert!(!add.loading);
        assert_eq!(add.alert, Some(translate(&UnicornError::Add)));
        assert_eq!(state.alert, None);
    }

    #[test]
    fn add_save_task_is_lifted() {
        let mut state = ListState::default();
        let _ = reduce(&mut state, ListAction::ShowAddUnicorn(true));
        let effect = reduce(&mut state, ListAction::AddUnicorn(AddAction::Save));
        assert_eq!(effect.task_names(), vec!["add_unicorn"]);
    }

    #[test]
    fn add_action_without_sheet_is_dropped() {
        let mut state = ListState::default();
        let response = add_response(&state, Ok(true));
        let effect = reduce(&mut state, response);
        assert!(effect.is_none());
        assert_eq!(state, ListState::default());
    }

    // ── Detail selection ───────────────────────────────────────────

    #[test]
    fn selecting_known_unicorn_opens_fresh_detail() {
        let mut state = loaded(Unicorn::samples());
        let id = Unicorn::hippolyta().id;
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(Some(id)));

        let selection = state.selection.as_ref().unwrap();
        assert_eq!(selection.id, id);
        assert_eq!(
            selection.detail,
            DetailState::new(state.session, Unicorn::hippolyta())
        );
    }

    #[test]
    fn selecting_unknown_or_none_clears_selection() {
        let mut state = loaded(Unicorn::samples());
        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Unicorn::zephyra().id)),
        );
        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Uuid::from_u128(42))),
        );
        assert_eq!(state.selection, None);

        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Unicorn::zephyra().id)),
        );
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(None));
        assert_eq!(state.selection, None);
    }

    #[test]
    fn reselecting_discards_unsaved_edits() {
        let mut state = loaded(Unicorn::samples());
        let id = Unicorn::cassiopeia().id;
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(Some(id)));
        let _ = reduce(&mut state, ListAction::UnicornDetail(DetailAction::OnAppear));
        let _ = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::NameChanged("Cassie".into())),
        );
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(Some(id)));
        assert_eq!(state.selection.as_ref().unwrap().detail.name, "");
    }

    #[test]
    fn detail_save_success_clears_selection_and_reloads() {
        let mut state = loaded(Unicorn::samples());
        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Unicorn::cassiopeia().id)),
        );
        let session = detail_session(&state);
        let effect = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::SaveResponse {
                session,
                response: Ok(true),
            }),
        );
        assert_eq!(state.selection, None);
        assert_eq!(effect.actions(), vec![&ListAction::Fetch]);
    }

    #[test]
    fn detail_delete_success_clears_selection_and_reloads() {
        let mut state = loaded(Unicorn::samples());
        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Unicorn::cassiopeia().id)),
        );
        let session = detail_session(&state);
        let effect = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::DeleteResponse {
                session,
                response: Ok(true),
            }),
        );
        assert_eq!(state.selection, None);
        assert_eq!(effect.actions(), vec![&ListAction::Fetch]);
    }

    #[test]
    fn detail_failure_keeps_selection() {
        let mut state = loaded(Unicorn::samples());
        let id = Unicorn::cassiopeia().id;
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(Some(id)));
        let _ = reduce(&mut state, ListAction::UnicornDetail(DetailAction::Delete));
        let session = detail_session(&state);
        let effect = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::DeleteResponse {
                session,
                response: Err(UnicornError::Delete),
            }),
        );

        assert!(effect.is_none());
        let selection = state.selection.as_ref().unwrap();
        assert_eq!(selection.id, id);
        assert!(!selection.detail.loading);
        assert_eq!(
            selection.detail.alert,
            Some(translate(&UnicornError::Delete))
        );
        assert_eq!(state.alert, None);
    }

    #[test]
    fn stale_detail_failure_does_not_reach_new_selection() {
        let mut state = loaded(Unicorn::samples());
        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Unicorn::cassiopeia().id)),
        );
        let session = detail_session(&state);
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(None));
        let _ = reduce(
            &mut state,
            ListAction::ShowUnicornDetail(Some(Unicorn::hippolyta().id)),
        );

        let _ = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::SaveResponse {
                session,
                response: Err(UnicornError::Edit),
            }),
        );
        let effect = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::DeleteResponse {
                session,
                response: Ok(true),
            }),
        );

        assert!(effect.is_none());
        let selection = state.selection.as_ref().unwrap();
        assert_eq!(selection.id, Unicorn::hippolyta().id);
        assert_eq!(selection.detail.alert, None);
    }

    #[test]
    fn reselecting_same_unicorn_starts_new_session() {
        let mut state = loaded(Unicorn::samples());
        let id = Unicorn::zephyra().id;
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(Some(id)));
        let first = detail_session(&state);
        let _ = reduce(&mut state, ListAction::ShowUnicornDetail(Some(id)));
        assert_ne!(detail_session(&state), first);
    }

    #[test]
    fn late_detail_response_after_teardown_is_ignored() {
        let mut state = loaded(Unicorn::samples());
        let session = detail_session(&state);
        let effect = reduce(
            &mut state,
            ListAction::UnicornDetail(DetailAction::SaveResponse {
                session,
                response: Ok(true),
            }),
        );
        assert!(effect.is_none());
        assert_eq!(state.selection, None);
    }
}
