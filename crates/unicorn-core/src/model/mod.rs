// ── Domain model ──
//
// Canonical types shared by the entity clients and the reducers.

pub mod flavour;
pub mod unicorn;

pub use flavour::Flavour;
pub use unicorn::Unicorn;
