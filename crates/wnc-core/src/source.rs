// ── Controller client seam ──
//
// Aggregators only see `WirelessApi`: one async method per collection,
// each yielding the collection or an error. `Connector` turns a
// `Controller` into a client. The RESTCONF client implements both.

use std::future::Future;

use wnc_api::Error as ApiError;
use wnc_api::RestconfClient;
use wnc_api::models::{
    ApOperData, CapwapData, CommonOperData, DcInfo, Dot11OperData, LldpNeighbor,
    RadioOperData, RfTag, RrmMeasurement, SisfDbMac, TrafficStats, WlanCfgData,
};

use crate::config::QueryOptions;
use crate::controller::Controller;

/// Read-only collections exposed by one controller.
pub trait WirelessApi: Send + Sync {
    fn capwap_data(&self) -> impl Future<Output = Result<Vec<CapwapData>, ApiError>> + Send;
    fn lldp_neighbors(&self) -> impl Future<Output = Result<Vec<LldpNeighbor>, ApiError>> + Send;
    fn ap_oper_data(&self) -> impl Future<Output = Result<Vec<ApOperData>, ApiError>> + Send;
    fn radio_oper_data(&self)
    -> impl Future<Output = Result<Vec<RadioOperData>, ApiError>> + Send;
    fn rrm_measurements(
        &self,
    ) -> impl Future<Output = Result<Vec<RrmMeasurement>, ApiError>> + Send;
    fn rf_tags(&self) -> impl Future<Output = Result<Vec<RfTag>, ApiError>> + Send;
    fn common_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<CommonOperData>, ApiError>> + Send;
    fn dot11_oper_data(&self)
    -> impl Future<Output = Result<Vec<Dot11OperData>, ApiError>> + Send;
    fn traffic_stats(&self) -> impl Future<Output = Result<Vec<TrafficStats>, ApiError>> + Send;
    fn sisf_db_mac(&self) -> impl Future<Output = Result<Vec<SisfDbMac>, ApiError>> + Send;
    fn dc_info(&self) -> impl Future<Output = Result<Vec<DcInfo>, ApiError>> + Send;
    fn wlan_cfg_data(&self) -> impl Future<Output = Result<WlanCfgData, ApiError>> + Send;
}

/// Builds a client for one controller.
pub trait Connector: Send + Sync {
    type Api: WirelessApi;

    fn connect(&self, controller: &Controller, options: &QueryOptions)
    -> Result<Self::Api, ApiError>;
}

/// Production connector: one RESTCONF client per controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestconfConnector;

impl Connector for RestconfConnector {
    type Api = RestconfClient;

    fn connect(
        &self,
        controller: &Controller,
        options: &QueryOptions,
    ) -> Result<RestconfClient, ApiError> {
        RestconfClient::new(
            &controller.hostname,
            &controller.credential,
            &options.transport(),
        )
    }
}

impl WirelessApi for RestconfClient {
    fn capwap_data(&self) -> impl Future<Output = Result<Vec<CapwapData>, ApiError>> + Send {
        Self::capwap_data(self)
    }

    fn lldp_neighbors(&self) -> impl Future<Output = Result<Vec<LldpNeighbor>, ApiError>> + Send {
        Self::lldp_neighbors(self)
    }

    fn ap_oper_data(&self) -> impl Future<Output = Result<Vec<ApOperData>, ApiError>> + Send {
        Self::ap_oper_data(self)
    }

    fn radio_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<RadioOperData>, ApiError>> + Send {
        Self::radio_oper_data(self)
    }

    fn rrm_measurements(
        &self,
    ) -> impl Future<Output = Result<Vec<RrmMeasurement>, ApiError>> + Send {
        Self::rrm_measurements(self)
    }

    fn rf_tags(&self) -> impl Future<Output = Result<Vec<RfTag>, ApiError>> + Send {
        Self::rf_tags(self)
    }

    fn common_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<CommonOperData>, ApiError>> + Send {
        Self::common_oper_data(self)
    }

    fn dot11_oper_data(
        &self,
    ) -> impl Future<Output = Result<Vec<Dot11OperData>, ApiError>> + Send {
        Self::dot11_oper_data(self)
    }

    fn traffic_stats(&self) -> impl Future<Output = Result<Vec<TrafficStats>, ApiError>> + Send {
        Self::traffic_stats(self)
    }

    fn sisf_db_mac(&self) -> impl Future<Output = Result<Vec<SisfDbMac>, ApiError>> + Send {
        Self::sisf_db_mac(self)
    }

    fn dc_info(&self) -> impl Future<Output = Result<Vec<DcInfo>, ApiError>> + Send {
        Self::dc_info(self)
    }

    fn wlan_cfg_data(&self) -> impl Future<Output = Result<WlanCfgData, ApiError>> + Send {
        Self::wlan_cfg_data(self)
    }
}
