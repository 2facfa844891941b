// ── Add unicorn sheet ──
//
// idle → saving → (idle | closed). Closing is the parent's job: the list
// watches for `Close` and a successful `SaveResponse`. A response stamped
// with another session is from an earlier sheet and is dropped.

use tracing::debug;

use crate::alert::{self, AlertAction, AlertState};
use crate::effect::Effect;
use crate::error::UnicornError;
use crate::model::{Flavour, Unicorn};
use crate::reducer::{Reducer, succeeded};

use super::Session;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddState {
    pub session: Session,
    pub name: String,
    pub flavour: Flavour,
    pub loading: bool,
    pub alert: Option<AlertState>,
}

impl AddState {
    /// A blank sheet for one presentation.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAction {
    NameChanged(String),
    FlavourChanged(Flavour),
    /// Store a new unicorn from the scratch fields. The name is not
    /// validated here; the form disables saving on an empty name.
    Save,
    /// Result of the `add_unicorn` task. `Ok(false)` means the backend did
    /// not store the unicorn and is reported like an error.
    SaveResponse {
        session: Session,
        response: Result<bool, UnicornError>,
    },
    /// User dismissed the sheet.
    Close,
    Alert(AlertAction),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AddReducer;

impl Reducer for AddReducer {
    type State = AddState;
    type Action = AddAction;

    fn reduce(&self, state: &mut AddState, action: AddAction) -> Effect<AddAction> {
        match action {
            AddAction::NameChanged(name) => {
                state.name = name;
                Effect::none()
            }
            AddAction::FlavourChanged(flavour) => {
                state.flavour = flavour;
                Effect::none()
            }
            AddAction::Save => {
                if state.loading {
                    debug!("save already in flight, ignoring");
                    return Effect::none();
                }
                state.loading = true;
                let session = state.session;
                let unicorn = Unicorn::new(state.name.clone(), state.flavour);
                Effect::run("add_unicorn", move |env| async move {
                    AddAction::SaveResponse {
                        session,
                        response: env.unicorns.add(unicorn).await,
                    }
                })
            }
            AddAction::SaveResponse { session, response } => {
                if session != state.session {
                    debug!(?session, "response from a closed sheet, dropping");
                    return Effect::none();
                }
                state.loading = false;
                if !succeeded(&response) {
                    let error = response.err().unwrap_or(UnicornError::Add);
                    alert::present(&mut state.alert, &error);
                }
                Effect::none()
            }
            AddAction::Close => Effect::none(),
            AddAction::Alert(action) => {
                alert::reduce(&mut state.alert, action);
                Effect::none()
            }
        }
    }
}
