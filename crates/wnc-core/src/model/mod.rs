// ── Merged record types ──
//
// One record per primary-collection entry, carrying the originating
// controller hostname and the matched secondary records (zero-valued when
// nothing matched). Records serialize with their nested YANG models as-is,
// so JSON output mirrors the controller's own field names.

pub mod ap;
pub mod client;
pub mod overview;
pub mod wlan;

pub use ap::{ApRecord, ApTagRecord};
pub use client::{ClientQuery, ClientRecord};
pub use overview::{OverviewQuery, OverviewRecord, OverviewSortKey};
pub use wlan::WlanRecord;
