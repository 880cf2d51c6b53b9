use serde::Serialize;
use wnc_api::models::{CommonOperData, DcInfo, Dot11OperData, SisfDbMac, TrafficStats};

/// Client station joined across the five client-oper lists by MAC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientRecord {
    pub controller: String,
    pub common: CommonOperData,
    pub dot11: Dot11OperData,
    pub traffic: TrafficStats,
    pub sisf: SisfDbMac,
    pub dc: DcInfo,
}

impl ClientRecord {
    pub fn mac(&self) -> &str {
        &self.common.client_mac
    }

    pub fn ssid(&self) -> &str {
        &self.dot11.vap_ssid
    }

    pub fn radio_slot(&self) -> u8 {
        self.common.ms_ap_slot_id
    }
}

/// Optional client filters. Empty strings disable a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientQuery {
    pub ssid: String,
    pub radio_slot: String,
}
