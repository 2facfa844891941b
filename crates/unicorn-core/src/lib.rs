//! Reducer-driven state core for the unicorn app.
//!
//! This crate owns the domain model, entity clients, and the composable
//! state machines the CLI drives:
//!
//! - **[`Reducer`]**: Pure `(state, action) -> effect` units. The
//!   [`feature`] tree composes them: [`RootReducer`] forwards to
//!   [`ListReducer`], which delegates to the add sheet and the detail
//!   selection and watches their outcomes to close them and reload.
//!
//! - **[`Effect`]**: Data describing follow-up work: immediate actions and
//!   named async tasks. Child effects are lifted into parent actions with
//!   [`Effect::map`].
//!
//! - **[`Store`]**: Single-writer runtime. Reduces actions, spawns task
//!   effects against an [`Environment`], and feeds their results back.
//!
//! - **[`UnicornClient`]**: CRUD contract with an in-memory and a
//!   crudcrud-style HTTP implementation. Each operation fails with exactly
//!   one [`UnicornError`] kind.
//!
//! - **Alerts** ([`alert`]): Translation from error kinds to the dialog
//!   each workflow shows.

pub mod alert;
pub mod client;
pub mod config;
pub mod convert;
pub mod effect;
pub mod environment;
pub mod error;
pub mod feature;
pub mod model;
pub mod reducer;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use alert::{AlertAction, AlertState, translate};
pub use client::{HttpUnicornClient, InMemoryUnicornClient, UnicornClient};
pub use config::{Backend, BackendConfig, TlsVerification};
pub use effect::Effect;
pub use environment::{Environment, LogUrlOpener, UrlOpener};
pub use error::{CoreError, UnicornError};
pub use feature::{
    AddAction, AddReducer, AddState, ContactAction, ContactReducer, ContactState, DetailAction,
    DetailReducer, DetailState, ItemAction, ItemReducer, ListAction, ListReducer, ListState,
    RootAction, RootReducer, RootState, Selection, Session, Tab, UnicornItem,
};
pub use model::{Flavour, Unicorn};
pub use reducer::Reducer;
pub use store::Store;
