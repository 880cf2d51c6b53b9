// ── Cisco-IOS-XE-wireless-rrm-oper ──

use serde::{Deserialize, Serialize};

/// Per-radio RRM measurement from `rrm-measurement`, keyed by
/// (`wtp-mac`, `radio-slot-id`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RrmMeasurement {
    pub wtp_mac: String,
    pub radio_slot_id: u8,
    pub load: RrmLoad,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RrmLoad {
    pub rx_util_percentage: u8,
    pub tx_util_percentage: u8,
    pub cca_util_percentage: u8,
    /// Associated stations on this radio.
    pub stations: u32,
    pub rx_noise_channel_utilization: u8,
    pub non_wifi_inter: u8,
}
