use serde::Serialize;
use wnc_api::models::{WlanCfgEntry, WlanPolicy};

/// One (policy tag, WLAN profile, policy profile) association with the
/// referenced profile definitions resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WlanRecord {
    pub controller: String,
    pub tag_name: String,
    pub wlan_profile_name: String,
    pub policy_profile_name: String,
    pub wlan: WlanCfgEntry,
    pub policy: WlanPolicy,
}
