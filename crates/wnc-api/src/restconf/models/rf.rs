// ── Cisco-IOS-XE-wireless-rf-cfg ──

use serde::{Deserialize, Serialize};

/// RF tag from `rf-cfg-data/rf-tags/rf-tag`, keyed by `tag-name`.
///
/// Names one RF profile per band; an AP picks the profile matching each
/// radio's band.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RfTag {
    pub tag_name: String,
    pub description: String,
    pub dot11a_rf_profile_name: String,
    pub dot11b_rf_profile_name: String,
    #[serde(rename = "dot11-6ghz-rf-prof-name")]
    pub dot11_6ghz_rf_prof_name: String,
}
