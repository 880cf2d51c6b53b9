use serde::Serialize;
use wnc_api::models::{ApOperData, CapwapData, LldpNeighbor};

/// Access point joined across CAPWAP, LLDP and AP operational data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApRecord {
    pub controller: String,
    pub capwap: CapwapData,
    pub lldp: LldpNeighbor,
    pub oper: ApOperData,
}

impl ApRecord {
    pub fn name(&self) -> &str {
        &self.capwap.name
    }
}

/// Tag assignment of one access point, projected from its CAPWAP record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApTagRecord {
    pub controller: String,
    pub ap_name: String,
    pub wtp_mac: String,
    pub ip_addr: String,
    pub policy_tag: String,
    pub site_tag: String,
    pub rf_tag: String,
    pub tag_source: String,
    pub misconfigured: bool,
}

impl ApTagRecord {
    pub fn from_capwap(controller: &str, capwap: &CapwapData) -> Self {
        let tags = &capwap.tag_info;
        Self {
            controller: controller.to_owned(),
            ap_name: capwap.name.clone(),
            wtp_mac: capwap.wtp_mac.clone(),
            ip_addr: capwap.ip_addr.clone(),
            policy_tag: tags.policy_tag_info.policy_tag_name.clone(),
            site_tag: tags.site_tag.site_tag_name.clone(),
            rf_tag: tags.rf_tag.rf_tag_name.clone(),
            tag_source: tags.tag_source.clone(),
            misconfigured: tags.is_ap_misconfigured,
        }
    }
}
