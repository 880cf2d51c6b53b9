// ── WLAN aggregator ──
//
// `wlan-cfg-data` arrives as one tree. Each policy tag lists
// (WLAN profile, policy profile) associations by name; both names are
// resolved against sibling lists in the same tree. Every association yields
// a record, resolved or not.

use wnc_api::models::WlanCfgData;

use super::{Aggregation, Aggregator, FetchFailure, ForCollection, collect};
use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::join::FirstMatchIndex;
use crate::model::WlanRecord;
use crate::source::{Connector, WirelessApi};

pub(crate) struct Wlans;

impl Aggregator for Wlans {
    const ENTITY: &'static str = "wlan";
    type Bundle = WlanCfgData;
    type Record = WlanRecord;

    async fn fetch<A: WirelessApi>(api: &A) -> Result<WlanCfgData, FetchFailure> {
        api.wlan_cfg_data().await.for_collection("wlan-cfg-data")
    }

    fn merge(controller: &str, bundle: WlanCfgData) -> Vec<WlanRecord> {
        let profiles = FirstMatchIndex::build(&bundle.wlan_cfg_entries.wlan_cfg_entry, |w| {
            w.profile_name.as_str()
        });
        let policies = FirstMatchIndex::build(&bundle.wlan_policies.wlan_policy, |p| {
            p.policy_profile_name.as_str()
        });

        let mut records = Vec::new();
        for tag in &bundle.policy_list_entries.policy_list_entry {
            for assoc in &tag.wlan_policies.wlan_policy {
                records.push(WlanRecord {
                    controller: controller.to_owned(),
                    tag_name: tag.tag_name.clone(),
                    wlan_profile_name: assoc.wlan_profile_name.clone(),
                    policy_profile_name: assoc.policy_profile_name.clone(),
                    wlan: profiles.get_or_default(&assoc.wlan_profile_name.as_str()),
                    policy: policies.get_or_default(&assoc.policy_profile_name.as_str()),
                });
            }
        }
        records
    }
}

/// Policy-tag to WLAN/policy profile mappings of every controller.
pub async fn wlans<C: Connector>(
    connector: &C,
    controllers: &[Controller],
    options: &QueryOptions,
) -> Aggregation<WlanRecord> {
    collect::<Wlans, C>(connector, controllers, options).await
}
