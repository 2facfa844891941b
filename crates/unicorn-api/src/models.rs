// Wire types for the unicorn REST resource.
//
// Fields stay stringly-typed at this layer; `unicorn-core` converts
// them into domain types (UUID ids, `Flavour` enum) with fallbacks.

use serde::{Deserialize, Serialize};

/// A unicorn as stored by the backend.
///
/// `_id` is assigned by the backend on create and addresses the record
/// for PUT/DELETE. It is never sent back in request bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnicornRecord {
    #[serde(rename = "_id", default, skip_serializing)]
    pub record_id: Option<String>,
    pub id: String,
    pub name: String,
    pub flavour: String,
}
