// Client-station operational endpoints
//
// The five lists under `client-oper-data` that together describe one
// associated station.

use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;
use crate::restconf::models::{CommonOperData, DcInfo, Dot11OperData, SisfDbMac, TrafficStats};

const CLIENT_OPER: &str = "Cisco-IOS-XE-wireless-client-oper:client-oper-data";

impl RestconfClient {
    /// `GET {CLIENT_OPER}/common-oper-data`
    pub async fn common_oper_data(&self) -> Result<Vec<CommonOperData>, Error> {
        debug!("fetching common-oper-data");
        self.get(&format!("{CLIENT_OPER}/common-oper-data")).await
    }

    /// `GET {CLIENT_OPER}/dot11-oper-data`
    pub async fn dot11_oper_data(&self) -> Result<Vec<Dot11OperData>, Error> {
        debug!("fetching dot11-oper-data");
        self.get(&format!("{CLIENT_OPER}/dot11-oper-data")).await
    }

    /// `GET {CLIENT_OPER}/traffic-stats`
    pub async fn traffic_stats(&self) -> Result<Vec<TrafficStats>, Error> {
        debug!("fetching traffic-stats");
        self.get(&format!("{CLIENT_OPER}/traffic-stats")).await
    }

    /// `GET {CLIENT_OPER}/sisf-db-mac`
    pub async fn sisf_db_mac(&self) -> Result<Vec<SisfDbMac>, Error> {
        debug!("fetching sisf-db-mac");
        self.get(&format!("{CLIENT_OPER}/sisf-db-mac")).await
    }

    /// `GET {CLIENT_OPER}/dc-info`
    pub async fn dc_info(&self) -> Result<Vec<DcInfo>, Error> {
        debug!("fetching dc-info");
        self.get(&format!("{CLIENT_OPER}/dc-info")).await
    }
}
