// WLAN configuration endpoints

use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;
use crate::restconf::models::WlanCfgData;

impl RestconfClient {
    /// Fetch the whole WLAN configuration tree in one request: policy tags,
    /// WLAN profiles, and policy profiles.
    ///
    /// `GET Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data`
    pub async fn wlan_cfg_data(&self) -> Result<WlanCfgData, Error> {
        debug!("fetching wlan-cfg-data");
        self.get("Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data").await
    }
}
