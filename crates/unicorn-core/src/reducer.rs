// ── Reducer trait ──

use crate::effect::Effect;

/// A pure state-transition unit: `(state, action) -> effect`.
///
/// Implementations mutate `state` in place and describe any follow-up
/// work as an [`Effect`]. They never perform I/O themselves.
pub trait Reducer {
    type State;
    type Action: Send + 'static;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effect<Self::Action>;
}

/// `true` for a response that should count as a completed operation.
///
/// The entity client reports success as `Ok(true)`; a backend that answers
/// `Ok(false)` did not perform the change.
pub(crate) fn succeeded<E>(response: &Result<bool, E>) -> bool {
    matches!(response, Ok(true))
}
