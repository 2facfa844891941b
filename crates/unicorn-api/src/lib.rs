// unicorn-api: Async Rust client for crudcrud-style REST backends

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::CrudClient;
pub use error::Error;
pub use models::UnicornRecord;
pub use transport::{TlsMode, TransportConfig};
