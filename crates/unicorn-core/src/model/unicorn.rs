// ── Unicorn domain type ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::flavour::Flavour;

/// The managed entity.
///
/// `id` is the stable semantic identity used by the reducers. `record_id`
/// is whatever the backend uses to address the stored record (crudcrud's
/// `_id`); it is carried along untouched so update/delete can find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unicorn {
    pub id: Uuid,
    pub name: String,
    pub flavour: Flavour,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl Default for Unicorn {
    fn default() -> Self {
        Self::new(String::new(), Flavour::default())
    }
}

impl Unicorn {
    /// A new, not-yet-stored unicorn with a fresh id.
    pub fn new(name: impl Into<String>, flavour: Flavour) -> Self {
        Self::with_id(Uuid::new_v4(), name, flavour)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>, flavour: Flavour) -> Self {
        Self {
            id,
            name: name.into(),
            flavour,
            record_id: None,
        }
    }

    // ── Sample data ──────────────────────────────────────────────────

    pub fn cassiopeia() -> Self {
        Self::with_id(Uuid::from_u128(1), "Cassiopeia", Flavour::Red)
    }

    pub fn hippolyta() -> Self {
        Self::with_id(Uuid::from_u128(2), "Hippolyta", Flavour::Green)
    }

    pub fn zephyra() -> Self {
        Self::with_id(Uuid::from_u128(3), "Zephyra", Flavour::Blue)
    }

    /// Cassiopeia, Hippolyta and Zephyra, in that order.
    pub fn samples() -> Vec<Self> {
        vec![Self::cassiopeia(), Self::hippolyta(), Self::zephyra()]
    }
}
