// ── Unicorn detail ──
//
// View and edit one unicorn. `unicorn` is the snapshot taken when the
// detail opened; `name` and `flavour` are the scratch copy the user edits
// and are only meaningful after `OnAppear`. Each detail the list opens gets
// its own session; responses from another session are dropped.

use tracing::debug;

use crate::alert::{self, AlertAction, AlertState};
use crate::effect::Effect;
use crate::error::UnicornError;
use crate::model::{Flavour, Unicorn};
use crate::reducer::{Reducer, succeeded};

use super::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    pub session: Session,
    pub unicorn: Unicorn,
    pub name: String,
    pub flavour: Flavour,
    pub loading: bool,
    pub alert: Option<AlertState>,
}

impl DetailState {
    pub fn new(session: Session, unicorn: Unicorn) -> Self {
        Self {
            session,
            unicorn,
            name: String::new(),
            flavour: Flavour::default(),
            loading: false,
            alert: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    /// Copy the snapshot into the scratch fields.
    OnAppear,
    NameChanged(String),
    FlavourChanged(Flavour),
    Save,
    /// `Ok(false)` is reported like an error, as for `DeleteResponse`.
    SaveResponse {
        session: Session,
        response: Result<bool, UnicornError>,
    },
    Delete,
    DeleteResponse {
        session: Session,
        response: Result<bool, UnicornError>,
    },
    Alert(AlertAction),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DetailReducer;

impl DetailReducer {
    fn respond(
        state: &mut DetailState,
        session: Session,
        response: Result<bool, UnicornError>,
        kind: UnicornError,
    ) {
        if session != state.session {
            debug!(?session, id = %state.unicorn.id, "response from a closed detail, dropping");
            return;
        }
        state.loading = false;
        if !succeeded(&response) {
            alert::present(&mut state.alert, &response.err().unwrap_or(kind));
        }
    }
}

impl Reducer for DetailReducer {
    type State = DetailState;
    type Action = DetailAction;

    fn reduce(&self, state: &mut DetailState, action: DetailAction) -> Effect<DetailAction> {
        match action {
            DetailAction::OnAppear => {
                state.name = state.unicorn.name.clone();
                state.flavour = state.unicorn.flavour;
                Effect::none()
            }
            DetailAction::NameChanged(name) => {
                state.name = name;
                Effect::none()
            }
            DetailAction::FlavourChanged(flavour) => {
                state.flavour = flavour;
                Effect::none()
            }
            DetailAction::Save => {
                if state.loading {
                    debug!(id = %state.unicorn.id, "request in flight, ignoring save");
                    return Effect::none();
                }
                state.loading = true;
                let session = state.session;
                let unicorn = state.unicorn.clone();
                let name = state.name.clone();
                let flavour = state.flavour;
                Effect::run("update_unicorn", move |env| async move {
                    DetailAction::SaveResponse {
                        session,
                        response: env.unicorns.update(unicorn, name, flavour).await,
                    }
                })
            }
            DetailAction::SaveResponse { session, response } => {
                Self::respond(state, session, response, UnicornError::Edit);
                Effect::none()
            }
            DetailAction::Delete => {
                if state.loading {
                    debug!(id = %state.unicorn.id, "request in flight, ignoring delete");
                    return Effect::none();
                }
                state.loading = true;
                let session = state.session;
                let unicorn = state.unicorn.clone();
                Effect::run("delete_unicorn", move |env| async move {
                    DetailAction::DeleteResponse {
                        session,
                        response: env.unicorns.delete(unicorn).await,
                    }
                })
            }
            DetailAction::DeleteResponse { session, response } => {
                Self::respond(state, session, response, UnicornError::Delete);
                Effect::none()
            }
            DetailAction::Alert(action) => {
                alert::reduce(&mut state.alert, action);
                Effect::none()
            }
        }
    }
}
