// ── API-to-domain type conversions ──
//
// Bridges raw `unicorn_api` wire records into canonical domain types.
// Identity and category fields are lenient: a malformed `id` gets a
// fresh UUID and an unknown flavour becomes the default.

use unicorn_api::UnicornRecord;
use uuid::Uuid;

use crate::model::{Flavour, Unicorn};

impl From<UnicornRecord> for Unicorn {
    fn from(r: UnicornRecord) -> Self {
        Unicorn {
            id: Uuid::parse_str(&r.id).unwrap_or_else(|_| Uuid::new_v4()),
            name: r.name,
            flavour: Flavour::from_raw(&r.flavour),
            record_id: r.record_id,
        }
    }
}

impl From<&Unicorn> for UnicornRecord {
    fn from(u: &Unicorn) -> Self {
        UnicornRecord {
            record_id: u.record_id.clone(),
            id: u.id.to_string(),
            name: u.name.clone(),
            flavour: u.flavour.as_ref().to_owned(),
        }
    }
}
