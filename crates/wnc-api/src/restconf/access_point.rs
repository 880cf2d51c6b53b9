// Access point operational endpoints
//
// Read-only lists under `access-point-oper-data`: CAPWAP join records,
// LLDP neighbors, AP system state, and per-slot radio state.

use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;
use crate::restconf::models::{ApOperData, CapwapData, LldpNeighbor, RadioOperData};

const AP_OPER: &str = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data";

impl RestconfClient {
    /// List joined access points.
    ///
    /// `GET {AP_OPER}/capwap-data`
    pub async fn capwap_data(&self) -> Result<Vec<CapwapData>, Error> {
        debug!("fetching capwap-data");
        self.get(&format!("{AP_OPER}/capwap-data")).await
    }

    /// List LLDP neighbors reported by access points.
    ///
    /// `GET {AP_OPER}/lldp-neigh`
    pub async fn lldp_neighbors(&self) -> Result<Vec<LldpNeighbor>, Error> {
        debug!("fetching lldp-neigh");
        self.get(&format!("{AP_OPER}/lldp-neigh")).await
    }

    /// List AP system state (CPU, memory, join time).
    ///
    /// `GET {AP_OPER}/oper-data`
    pub async fn ap_oper_data(&self) -> Result<Vec<ApOperData>, Error> {
        debug!("fetching ap oper-data");
        self.get(&format!("{AP_OPER}/oper-data")).await
    }

    /// List per-slot radio state.
    ///
    /// `GET {AP_OPER}/radio-oper-data`
    pub async fn radio_oper_data(&self) -> Result<Vec<RadioOperData>, Error> {
        debug!("fetching radio-oper-data");
        self.get(&format!("{AP_OPER}/radio-oper-data")).await
    }
}
