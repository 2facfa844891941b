// ── Error translation ──
//
// Pure mapping from domain errors to the alert each workflow shows.

use tracing::debug;

use crate::error::UnicornError;

const TITLE: &str = "Error";
const DISMISS: &str = "OK";

const FETCH_MESSAGE: &str =
    "An error was encountered while attempting to load unicorns. Please retry at a later time.";
const ADD_MESSAGE: &str =
    "An error was encountered while attempting to add the unicorn. Please retry at a later time.";
const EDIT_MESSAGE: &str =
    "An error was encountered while attempting to edit the unicorn. Please retry at a later time.";
const DELETE_MESSAGE: &str = "An error was encountered while attempting to delete the unicorn. Please retry at a later time.";
const UNKNOWN_MESSAGE: &str = "Oops! Something went wrong. We're sorry, but it looks like there was an error. Please try again later or contact support if the issue persists.";

/// Data describing a user-facing error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

/// The only interaction an alert supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Dismiss,
}

/// Build the alert for a domain error.
pub fn translate(error: &UnicornError) -> AlertState {
    let message = match error {
        UnicornError::Fetch => FETCH_MESSAGE,
        UnicornError::Add => ADD_MESSAGE,
        UnicornError::Edit => EDIT_MESSAGE,
        UnicornError::Delete => DELETE_MESSAGE,
        UnicornError::Unknown => UNKNOWN_MESSAGE,
    };
    AlertState {
        title: TITLE.to_owned(),
        message: message.to_owned(),
        dismiss_label: DISMISS.to_owned(),
    }
}

/// Build the alert for an arbitrary error. Anything that is not a
/// [`UnicornError`] gets the generic message.
pub fn translate_any(error: &(dyn std::error::Error + 'static)) -> AlertState {
    translate(
        error
            .downcast_ref::<UnicornError>()
            .unwrap_or(&UnicornError::Unknown),
    )
}

/// Store an alert for `error` in `slot` unless one is already showing.
///
/// The first alert stays until dismissed; later failures are logged and
/// dropped.
pub(crate) fn present(slot: &mut Option<AlertState>, error: &UnicornError) {
    if slot.is_some() {
        debug!(%error, "alert already showing, dropping newer failure");
        return;
    }
    *slot = Some(translate(error));
}

/// Apply an [`AlertAction`] to an alert slot.
pub(crate) fn reduce(slot: &mut Option<AlertState>, action: AlertAction) {
    match action {
        AlertAction::Dismiss => *slot = None,
    }
}
