// RESTCONF client modules
//
// Hand-written client for the controller's RESTCONF data tree. Each endpoint
// module adds read-only inherent methods for one YANG model; `models` holds
// the typed records they return.

pub mod access_point;
pub mod client;
pub mod client_oper;
pub mod models;
pub mod rf;
pub mod rrm;
pub mod wlan;

pub use client::RestconfClient;
