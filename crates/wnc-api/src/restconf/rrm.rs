// RRM operational endpoints

use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;
use crate::restconf::models::RrmMeasurement;

impl RestconfClient {
    /// List per-radio load measurements.
    ///
    /// `GET Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data/rrm-measurement`
    pub async fn rrm_measurements(&self) -> Result<Vec<RrmMeasurement>, Error> {
        debug!("fetching rrm-measurement");
        self.get("Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data/rrm-measurement")
            .await
    }
}
