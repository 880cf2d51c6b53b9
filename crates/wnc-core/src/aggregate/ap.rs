// ── Access-point aggregator ──
//
// Primary: `capwap-data`. Secondaries `lldp-neigh` and `oper-data` are
// matched on `wtp-mac`.

use wnc_api::models::{ApOperData, CapwapData, LldpNeighbor};

use super::{Aggregation, Aggregator, FetchFailure, ForCollection, collect};
use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::join::FirstMatchIndex;
use crate::model::ApRecord;
use crate::source::{Connector, WirelessApi};

pub(crate) struct AccessPoints;

pub(crate) struct ApBundle {
    capwap: Vec<CapwapData>,
    lldp: Vec<LldpNeighbor>,
    oper: Vec<ApOperData>,
}

impl Aggregator for AccessPoints {
    const ENTITY: &'static str = "ap";
    type Bundle = ApBundle;
    type Record = ApRecord;

    async fn fetch<A: WirelessApi>(api: &A) -> Result<ApBundle, FetchFailure> {
        let capwap = api.capwap_data().await.for_collection("capwap-data")?;
        let lldp = api.lldp_neighbors().await.for_collection("lldp-neigh")?;
        let oper = api.ap_oper_data().await.for_collection("oper-data")?;
        Ok(ApBundle { capwap, lldp, oper })
    }

    fn merge(controller: &str, bundle: ApBundle) -> Vec<ApRecord> {
        let lldp = FirstMatchIndex::build(&bundle.lldp, |n| n.wtp_mac.as_str());
        let oper = FirstMatchIndex::build(&bundle.oper, |o| o.wtp_mac.as_str());

        bundle
            .capwap
            .iter()
            .map(|capwap| {
                let mac = capwap.wtp_mac.as_str();
                ApRecord {
                    controller: controller.to_owned(),
                    capwap: capwap.clone(),
                    lldp: lldp.get_or_default(&mac),
                    oper: oper.get_or_default(&mac),
                }
            })
            .collect()
    }
}

/// Access points of every controller, joined with LLDP and AP oper data.
pub async fn access_points<C: Connector>(
    connector: &C,
    controllers: &[Controller],
    options: &QueryOptions,
) -> Aggregation<ApRecord> {
    collect::<AccessPoints, C>(connector, controllers, options).await
}
