// ── Contact tab ──

use crate::effect::Effect;
use crate::reducer::Reducer;

/// The contact tab holds no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum ContactAction {
    LinkedIn,
    Xing,
    Twitter,
}

impl ContactAction {
    /// The profile this link opens.
    pub fn url(self) -> &'static str {
        match self {
            Self::LinkedIn => "https://www.linkedin.com/in/machometus/",
            Self::Xing => "https://www.xing.com/profile/Mohamed_Salem19",
            Self::Twitter => "https://twitter.com/MSalemsson",
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactState;
    type Action = ContactAction;

    fn reduce(&self, _state: &mut ContactState, action: ContactAction) -> Effect<ContactAction> {
        let url = action.url();
        Effect::fire_and_forget("open_url", move |env| async move {
            env.url_opener.open(url);
        })
    }
}
