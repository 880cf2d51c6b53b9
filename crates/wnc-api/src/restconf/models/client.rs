// ── Cisco-IOS-XE-wireless-client-oper ──
//
// Client-station lists. They all describe the same station, but the key
// leaf is named differently depending on the list: `client-mac`,
// `ms-mac-address`, or `mac-addr`.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Association state from `common-oper-data`, keyed by `client-mac`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CommonOperData {
    pub client_mac: String,
    pub ap_name: String,
    pub ms_ap_slot_id: u8,
    pub ms_radio_type: String,
    pub wlan_id: u32,
    pub client_type: String,
    /// e.g. `client-status-run`.
    pub co_state: String,
    pub username: String,
}

/// 802.11 association details from `dot11-oper-data`, keyed by `ms-mac-address`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Dot11OperData {
    pub ms_mac_address: String,
    pub dot11_state: String,
    pub ms_bssid: String,
    pub ap_mac_address: String,
    pub current_channel: u32,
    pub ms_wlan_id: u32,
    pub vap_ssid: String,
    pub policy_profile: String,
    pub ms_ap_slot_id: u8,
    pub radio_type: String,
    pub ewlc_ms_phy_type: String,
}

/// Traffic counters from `traffic-stats`, keyed by `ms-mac-address`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TrafficStats {
    pub ms_mac_address: String,
    #[serde(deserialize_with = "lenient::u64")]
    pub bytes_rx: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub bytes_tx: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub pkts_rx: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub pkts_tx: u64,
    #[serde(deserialize_with = "lenient::u64")]
    pub data_retries: u64,
    #[serde(deserialize_with = "lenient::i64")]
    pub most_recent_rssi: i64,
    #[serde(deserialize_with = "lenient::i64")]
    pub most_recent_snr: i64,
    /// Current PHY rate in Mbps.
    pub speed: u32,
    pub spatial_stream: u8,
}

/// Address bindings from the SISF device-tracking table, keyed by `mac-addr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SisfDbMac {
    pub mac_addr: String,
    pub ipv4_binding: Ipv4Binding,
    pub ipv6_binding: Vec<Ipv6Binding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Ipv4Binding {
    pub ip_key: IpKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Ipv6Binding {
    pub ip_key: IpKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct IpKey {
    pub zone_id: u32,
    pub ip_addr: String,
}

impl SisfDbMac {
    /// The station's IPv4 address, empty when unbound.
    pub fn ipv4(&self) -> &str {
        &self.ipv4_binding.ip_key.ip_addr
    }
}

/// Device classification from `dc-info`, keyed by `client-mac`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DcInfo {
    pub client_mac: String,
    pub device_type: String,
    pub device_name: String,
    pub device_vendor: String,
    pub device_os: String,
    pub confidence_level: u32,
}
