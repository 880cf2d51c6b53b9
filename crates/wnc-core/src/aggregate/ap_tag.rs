// ── AP tag aggregator ──
//
// Tag assignments already live inside each CAPWAP record, so this is a
// projection over `capwap-data` with no secondary join.

use wnc_api::models::CapwapData;

use super::{Aggregation, Aggregator, FetchFailure, ForCollection, collect};
use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::model::ApTagRecord;
use crate::source::{Connector, WirelessApi};

pub(crate) struct ApTags;

impl Aggregator for ApTags {
    const ENTITY: &'static str = "ap-tag";
    type Bundle = Vec<CapwapData>;
    type Record = ApTagRecord;

    async fn fetch<A: WirelessApi>(api: &A) -> Result<Vec<CapwapData>, FetchFailure> {
        api.capwap_data().await.for_collection("capwap-data")
    }

    fn merge(controller: &str, bundle: Vec<CapwapData>) -> Vec<ApTagRecord> {
        bundle
            .iter()
            .map(|capwap| ApTagRecord::from_capwap(controller, capwap))
            .collect()
    }
}

/// Policy, site and RF tag of every access point.
pub async fn ap_tags<C: Connector>(
    connector: &C,
    controllers: &[Controller],
    options: &QueryOptions,
) -> Aggregation<ApTagRecord> {
    collect::<ApTags, C>(connector, controllers, options).await
}
