// ── Cisco-IOS-XE-wireless-access-point-oper ──
//
// CAPWAP join records, LLDP neighbors, AP system state and per-slot radio
// state. All lists are keyed by `wtp-mac`; radios add `radio-slot-id`.

use serde::{Deserialize, Serialize};

use super::lenient;

// ── CAPWAP ───────────────────────────────────────────────────────────

/// One joined access point from `capwap-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CapwapData {
    pub wtp_mac: String,
    pub ip_addr: String,
    pub name: String,
    pub device_detail: DeviceDetail,
    pub ap_state: ApState,
    pub ap_location: ApLocation,
    pub tag_info: TagInfo,
    pub country_code: String,
    pub num_radio_slots: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DeviceDetail {
    pub static_info: StaticInfo,
    pub wtp_version: WtpVersion,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StaticInfo {
    pub board_data: BoardData,
    pub ap_models: ApModels,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BoardData {
    pub wtp_serial_num: String,
    pub wtp_enet_mac: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApModels {
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WtpVersion {
    pub sw_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApState {
    pub ap_admin_state: String,
    pub ap_operation_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApLocation {
    pub location: String,
}

/// Tag assignments resolved by the controller for one AP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TagInfo {
    /// Where the tags came from (`tag-source-static`, `tag-source-default`, ...).
    pub tag_source: String,
    pub is_ap_misconfigured: bool,
    pub policy_tag_info: PolicyTagInfo,
    pub site_tag: SiteTag,
    pub rf_tag: RfTagRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PolicyTagInfo {
    pub policy_tag_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteTag {
    pub site_tag_name: String,
    pub ap_profile: String,
    pub flex_profile: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RfTagRef {
    pub rf_tag_name: String,
}

// ── LLDP ─────────────────────────────────────────────────────────────

/// Upstream switch port learned over LLDP, from `lldp-neigh`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LldpNeighbor {
    pub wtp_mac: String,
    pub neighbor_mac: String,
    pub port_id: String,
    pub local_port: String,
    pub system_name: String,
    pub port_description: String,
    pub capabilities: String,
    pub mgmt_addr: String,
}

// ── AP operational data ──────────────────────────────────────────────

/// AP system state from `oper-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApOperData {
    pub wtp_mac: String,
    pub radio_id: u8,
    pub ap_antenna_band_mode: String,
    pub ap_sys_stats: ApSysStats,
    pub ap_time_info: ApTimeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApSysStats {
    pub cpu_usage: u8,
    pub memory_usage: u8,
    pub avg_cpu_usage: u8,
    pub avg_memory_usage: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApTimeInfo {
    pub boot_time: String,
    pub join_time: String,
}

// ── Radio operational data ───────────────────────────────────────────

/// Frequency band served by a radio slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadioBand {
    #[serde(rename = "2.4GHz")]
    TwoPointFourGhz,
    #[serde(rename = "5GHz")]
    FiveGhz,
    #[serde(rename = "6GHz")]
    SixGhz,
    #[serde(rename = "unknown")]
    Unknown,
}

impl std::fmt::Display for RadioBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TwoPointFourGhz => "2.4GHz",
            Self::FiveGhz => "5GHz",
            Self::SixGhz => "6GHz",
            Self::Unknown => "-",
        })
    }
}

/// One radio slot from `radio-oper-data`, keyed by (`wtp-mac`, `radio-slot-id`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RadioOperData {
    pub wtp_mac: String,
    pub radio_slot_id: u8,
    pub slot_id: u8,
    /// e.g. `client-dot11-5ghz-radio`, `client-xor-radio`.
    pub radio_type: String,
    pub admin_state: String,
    pub oper_state: String,
    pub radio_mode: String,
    pub phy_ht_cfg: PhyHtCfg,
    pub radio_band_info: Vec<RadioBandInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PhyHtCfg {
    pub cfg_data: PhyHtCfgData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PhyHtCfgData {
    /// Current channel number.
    pub curr_freq: u32,
    /// e.g. `chan-width-80-mhz`.
    pub chan_width: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RadioBandInfo {
    pub band_id: u8,
    pub phy_tx_pwr_lvl_cfg: PhyTxPwrLvlCfg,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PhyTxPwrLvlCfg {
    pub cfg_data: PhyTxPwrLvlCfgData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PhyTxPwrLvlCfgData {
    #[serde(deserialize_with = "lenient::i64")]
    pub curr_tx_power_in_dbm: i64,
}

impl RadioOperData {
    /// Current channel number (0 when the radio is down).
    pub fn channel(&self) -> u32 {
        self.phy_ht_cfg.cfg_data.curr_freq
    }

    /// Channel width in MHz, parsed from the YANG enum name.
    ///
    /// Only the first number counts, so `chan-width-80-80-mhz` is 80.
    /// Returns 0 for an empty or unrecognized value.
    pub fn channel_width_mhz(&self) -> u32 {
        self.phy_ht_cfg
            .cfg_data
            .chan_width
            .split(|c: char| !c.is_ascii_digit())
            .find(|run| !run.is_empty())
            .and_then(|run| run.parse().ok())
            .unwrap_or(0)
    }

    /// Transmit power of the active band, in dBm.
    pub fn tx_power_dbm(&self) -> i64 {
        self.radio_band_info
            .first()
            .map_or(0, |b| b.phy_tx_pwr_lvl_cfg.cfg_data.curr_tx_power_in_dbm)
    }

    /// Band served by this radio.
    ///
    /// Taken from `radio-type` when it names a band; dual-band (XOR) and
    /// unrecognized types fall back to the conventional slot layout
    /// (0 = 2.4 GHz, 1 = 5 GHz, 2 = 6 GHz).
    pub fn band(&self) -> RadioBand {
        let radio_type = self.radio_type.to_ascii_lowercase();
        if radio_type.contains("2ghz") || radio_type.contains("24ghz") {
            RadioBand::TwoPointFourGhz
        } else if radio_type.contains("5ghz") {
            RadioBand::FiveGhz
        } else if radio_type.contains("6ghz") {
            RadioBand::SixGhz
        } else {
            match self.radio_slot_id {
                0 => RadioBand::TwoPointFourGhz,
                1 => RadioBand::FiveGhz,
                2 => RadioBand::SixGhz,
                _ => RadioBand::Unknown,
            }
        }
    }
}
