// RF configuration endpoints

use tracing::debug;

use crate::error::Error;
use crate::restconf::client::RestconfClient;
use crate::restconf::models::RfTag;

impl RestconfClient {
    /// List RF tags.
    ///
    /// `GET Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-tags/rf-tag`
    pub async fn rf_tags(&self) -> Result<Vec<RfTag>, Error> {
        debug!("fetching rf-tags");
        self.get("Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-tags/rf-tag")
            .await
    }
}
