// ── Feature reducers ──
//
// One module per screen. Leaves first: item, add, detail; then the list
// that composes them, the static contact tab, and the root.

pub mod add;
pub mod contact;
pub mod detail;
pub mod item;
pub mod list;
pub mod root;

pub use add::{AddAction, AddReducer, AddState};
pub use contact::{ContactAction, ContactReducer, ContactState};
pub use detail::{DetailAction, DetailReducer, DetailState};
pub use item::{ItemAction, ItemReducer, UnicornItem};
pub use list::{ListAction, ListReducer, ListState, Selection};
pub use root::{RootAction, RootReducer, RootState, Tab};

/// Identifies one presentation of a child workflow.
///
/// The list hands out a new session every time it opens the add sheet or a
/// detail, and the child stamps it on its task results. A result carrying
/// an older session belongs to a workflow that was torn down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Session(u64);

impl Session {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
