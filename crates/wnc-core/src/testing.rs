// In-memory controller doubles for aggregator tests.
//
// A collection set to `None` fails its fetch; `Some(rows)` returns `rows`.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::future::{Future, ready};
use std::sync::{Arc, Mutex};

use wnc_api::Error as ApiError;
use wnc_api::models::{
    ApOperData, CapwapData, CommonOperData, DcInfo, Dot11OperData, LldpNeighbor,
    PolicyAssociation, PolicyListEntry, RadioOperData, RfTag, RrmMeasurement, SisfDbMac,
    TrafficStats, WlanCfgData, WlanCfgEntry, WlanPolicy,
};

use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::source::{Connector, WirelessApi};

#[derive(Debug, Clone, Default)]
pub(crate) struct MockApi {
    pub capwap: Option<Vec<CapwapData>>,
    pub lldp: Option<Vec<LldpNeighbor>>,
    pub ap_oper: Option<Vec<ApOperData>>,
    pub radio: Option<Vec<RadioOperData>>,
    pub rrm: Option<Vec<RrmMeasurement>>,
    pub rf_tags: Option<Vec<RfTag>>,
    pub common: Option<Vec<CommonOperData>>,
    pub dot11: Option<Vec<Dot11OperData>>,
    pub traffic: Option<Vec<TrafficStats>>,
    pub sisf: Option<Vec<SisfDbMac>>,
    pub dc: Option<Vec<DcInfo>>,
    pub wlan_cfg: Option<WlanCfgData>,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockApi {
    /// Shared log of the collections requested so far.
    pub fn call_log(&self) -> Arc<Mutex<Vec<&'static str>>> {
        Arc::clone(&self.calls)
    }

    fn serve<T: Clone + Send>(
        &self,
        collection: &'static str,
        rows: Option<&T>,
    ) -> impl Future<Output = Result<T, ApiError>> + Send + use<T> {
        self.calls.lock().unwrap().push(collection);
        let result = rows.cloned().ok_or_else(|| ApiError::Restconf {
            status: 500,
            message: format!("injected failure for {collection}"),
        });
        ready(result)
    }
}

impl WirelessApi for MockApi {
    fn capwap_data(&self) -> impl Future<Output = Result<Vec<CapwapData>, ApiError>> + Send {
        self.serve("capwap-data", self.capwap.as_ref())
    }

    fn lldp_neighbors(&self) -> impl Future<Output = Result<Vec<LldpNeighbor>, ApiError>> + Send {
        self.serve("lldp-neigh", self.lldp.as_ref())
    }

    fn ap_oper_data(&self) -> impl Future<Output = Result<Vec<ApOperData>, ApiError>> + Send {
        self.serve("oper-data", self.ap_oper.as_ref())
    }

    fn radio_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<RadioOperData>, ApiError>> + Send {
        self.serve("radio-oper-data", self.radio.as_ref())
    }

    fn rrm_measurements(
        &self,
    ) -> impl Future<Output = Result<Vec<RrmMeasurement>, ApiError>> + Send {
        self.serve("rrm-measurement", self.rrm.as_ref())
    }

    fn rf_tags(&self) -> impl Future<Output = Result<Vec<RfTag>, ApiError>> + Send {
        self.serve("rf-tag", self.rf_tags.as_ref())
    }

    fn common_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<CommonOperData>, ApiError>> + Send {
        self.serve("common-oper-data", self.common.as_ref())
    }

    fn dot11_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<Dot11OperData>, ApiError>> + Send {
        self.serve("dot11-oper-data", self.dot11.as_ref())
    }

    fn traffic_stats(&self) -> impl Future<Output = Result<Vec<TrafficStats>, ApiError>> + Send {
        self.serve("traffic-stats", self.traffic.as_ref())
    }

    fn sisf_db_mac(&self) -> impl Future<Output = Result<Vec<SisfDbMac>, ApiError>> + Send {
        self.serve("sisf-db-mac", self.sisf.as_ref())
    }

    fn dc_info(&self) -> impl Future<Output = Result<Vec<DcInfo>, ApiError>> + Send {
        self.serve("dc-info", self.dc.as_ref())
    }

    fn wlan_cfg_data(&self) -> impl Future<Output = Result<WlanCfgData, ApiError>> + Send {
        self.serve("wlan-cfg-data", self.wlan_cfg.as_ref())
    }
}

/// Hands out a `MockApi` per hostname, in registration order.
#[derive(Debug, Default)]
pub(crate) struct MockConnector {
    order: Vec<String>,
    apis: Vec<(String, MockApi)>,
    refused: HashSet<String>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, host: &str, api: MockApi) -> Self {
        self.order.push(host.to_owned());
        self.apis.push((host.to_owned(), api));
        self
    }

    /// Register a controller whose client cannot be built.
    pub fn refusing(mut self, host: &str) -> Self {
        self.order.push(host.to_owned());
        self.refused.insert(host.to_owned());
        self
    }

    pub fn controllers(&self) -> Vec<Controller> {
        self.order
            .iter()
            .map(|host| Controller::new(host.as_str(), "dG9rZW4="))
            .collect()
    }
}

impl Connector for MockConnector {
    type Api = MockApi;

    fn connect(&self, controller: &Controller, _: &QueryOptions) -> Result<MockApi, ApiError> {
        if self.refused.contains(&controller.hostname) {
            return Err(ApiError::Tls("handshake failed".into()));
        }
        self.apis
            .iter()
            .find(|(host, _)| *host == controller.hostname)
            .map(|(_, api)| api.clone())
            .ok_or_else(|| ApiError::Tls(format!("unknown host {}", controller.hostname)))
    }
}

// ── Fixtures ────────────────────────────────────────────────────────

pub(crate) fn capwap(mac: &str, name: &str) -> CapwapData {
    CapwapData {
        wtp_mac: mac.into(),
        name: name.into(),
        ..CapwapData::default()
    }
}

pub(crate) fn lldp(mac: &str, system_name: &str) -> LldpNeighbor {
    LldpNeighbor {
        wtp_mac: mac.into(),
        system_name: system_name.into(),
        ..LldpNeighbor::default()
    }
}

pub(crate) fn ap_oper(mac: &str, radio_id: u8) -> ApOperData {
    ApOperData {
        wtp_mac: mac.into(),
        radio_id,
        ..ApOperData::default()
    }
}

pub(crate) fn radio(mac: &str, slot: u8) -> RadioOperData {
    RadioOperData {
        wtp_mac: mac.into(),
        radio_slot_id: slot,
        slot_id: slot,
        ..RadioOperData::default()
    }
}

pub(crate) fn rrm(mac: &str, slot: u8, stations: u32) -> RrmMeasurement {
    let mut measurement = RrmMeasurement {
        wtp_mac: mac.into(),
        radio_slot_id: slot,
        ..RrmMeasurement::default()
    };
    measurement.load.stations = stations;
    measurement
}

pub(crate) fn rf_tag(name: &str, profile_prefix: &str) -> RfTag {
    RfTag {
        tag_name: name.into(),
        dot11b_rf_profile_name: format!("{profile_prefix}-24"),
        dot11a_rf_profile_name: format!("{profile_prefix}-5"),
        dot11_6ghz_rf_prof_name: format!("{profile_prefix}-6"),
        ..RfTag::default()
    }
}

pub(crate) fn common(mac: &str, slot: u8) -> CommonOperData {
    CommonOperData {
        client_mac: mac.into(),
        ms_ap_slot_id: slot,
        ..CommonOperData::default()
    }
}

pub(crate) fn dot11(mac: &str, ssid: &str) -> Dot11OperData {
    Dot11OperData {
        ms_mac_address: mac.into(),
        vap_ssid: ssid.into(),
        ..Dot11OperData::default()
    }
}

pub(crate) fn traffic(mac: &str, bytes_rx: u64) -> TrafficStats {
    TrafficStats {
        ms_mac_address: mac.into(),
        bytes_rx,
        ..TrafficStats::default()
    }
}

pub(crate) fn sisf(mac: &str, ipv4: &str) -> SisfDbMac {
    let mut entry = SisfDbMac {
        mac_addr: mac.into(),
        ..SisfDbMac::default()
    };
    entry.ipv4_binding.ip_key.ip_addr = ipv4.into();
    entry
}

pub(crate) fn dc(mac: &str, device_type: &str) -> DcInfo {
    DcInfo {
        client_mac: mac.into(),
        device_type: device_type.into(),
        ..DcInfo::default()
    }
}

pub(crate) fn wlan_entry(profile: &str, ssid: &str) -> WlanCfgEntry {
    let mut entry = WlanCfgEntry {
        profile_name: profile.into(),
        ..WlanCfgEntry::default()
    };
    entry.apf_vap_id_data.ssid = ssid.into();
    entry
}

pub(crate) fn wlan_policy(name: &str, vlan: &str) -> WlanPolicy {
    WlanPolicy {
        policy_profile_name: name.into(),
        interface_name: vlan.into(),
        ..WlanPolicy::default()
    }
}

/// Policy tag with `(wlan profile, policy profile)` associations.
pub(crate) fn policy_tag(name: &str, pairs: &[(&str, &str)]) -> PolicyListEntry {
    let mut entry = PolicyListEntry {
        tag_name: name.into(),
        ..PolicyListEntry::default()
    };
    entry.wlan_policies.wlan_policy = pairs
        .iter()
        .map(|(wlan, policy)| PolicyAssociation {
            wlan_profile_name: (*wlan).into(),
            policy_profile_name: (*policy).into(),
        })
        .collect();
    entry
}
