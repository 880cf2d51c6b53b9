//! Aggregation pipeline between `wnc-api` and the `wnc` CLI.
//!
//! This crate owns the fleet view: it asks every configured controller for
//! the collections an entity needs, joins them in memory, and narrows and
//! orders the combined result.
//!
//! - **[`aggregate`]**: One aggregator per entity (access point, AP tag,
//!   client, WLAN, overview). A controller contributes records only when
//!   every collection it was asked for arrived; otherwise it is skipped and
//!   reported in [`Aggregation::failures`].
//!
//! - **[`join`]**: [`FirstMatchIndex`], a hash index over a secondary
//!   collection where the first record for a key wins.
//!
//! - **[`filter`]** / **[`sort`]**: Equality filters (empty value = no-op)
//!   and a stable sort where an unknown key leaves the order untouched.
//!
//! - **[`Connector`]** / **[`WirelessApi`]**: The seam to the controller
//!   client. [`RestconfConnector`] is the production implementation.

pub mod aggregate;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod sort;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use aggregate::{Aggregation, ControllerFailure};
pub use config::{QueryOptions, TlsVerification};
pub use controller::{Controller, parse_controllers, redact_controllers, redact_entry};
pub use error::CoreError;
pub use join::FirstMatchIndex;
pub use model::{
    ApRecord, ApTagRecord, ClientQuery, ClientRecord, OverviewQuery, OverviewRecord,
    OverviewSortKey, WlanRecord,
};
pub use sort::{SortKey, SortOrder};
pub use source::{Connector, RestconfConnector, WirelessApi};
