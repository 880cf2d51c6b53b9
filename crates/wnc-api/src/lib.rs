// wnc-api: Async Rust client for the RESTCONF data API of wireless network controllers

pub mod error;
pub mod restconf;
pub mod transport;

pub use error::Error;
pub use restconf::RestconfClient;
pub use restconf::models;
pub use transport::{TlsMode, TransportConfig};
