// ── Client-station aggregator ──
//
// Five client-oper lists describe the same station under differently named
// MAC leaves. `common-oper-data` is primary; the others are indexed by
// their own key leaf.

use wnc_api::models::{CommonOperData, DcInfo, Dot11OperData, SisfDbMac, TrafficStats};

use super::{Aggregation, Aggregator, FetchFailure, ForCollection, collect};
use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::filter::filter_by;
use crate::join::FirstMatchIndex;
use crate::model::{ClientQuery, ClientRecord};
use crate::source::{Connector, WirelessApi};

pub(crate) struct Clients;

pub(crate) struct ClientBundle {
    common: Vec<CommonOperData>,
    dot11: Vec<Dot11OperData>,
    traffic: Vec<TrafficStats>,
    sisf: Vec<SisfDbMac>,
    dc: Vec<DcInfo>,
}

impl Aggregator for Clients {
    const ENTITY: &'static str = "client";
    type Bundle = ClientBundle;
    type Record = ClientRecord;

    async fn fetch<A: WirelessApi>(api: &A) -> Result<ClientBundle, FetchFailure> {
        Ok(ClientBundle {
            common: api.common_oper_data().await.for_collection("common-oper-data")?,
            dot11: api.dot11_oper_data().await.for_collection("dot11-oper-data")?,
            traffic: api.traffic_stats().await.for_collection("traffic-stats")?,
            sisf: api.sisf_db_mac().await.for_collection("sisf-db-mac")?,
            dc: api.dc_info().await.for_collection("dc-info")?,
        })
    }

    fn merge(controller: &str, bundle: ClientBundle) -> Vec<ClientRecord> {
        let dot11 = FirstMatchIndex::build(&bundle.dot11, |d| d.ms_mac_address.as_str());
        let traffic = FirstMatchIndex::build(&bundle.traffic, |t| t.ms_mac_address.as_str());
        let sisf = FirstMatchIndex::build(&bundle.sisf, |s| s.mac_addr.as_str());
        let dc = FirstMatchIndex::build(&bundle.dc, |d| d.client_mac.as_str());

        bundle
            .common
            .iter()
            .map(|common| {
                let mac = common.client_mac.as_str();
                ClientRecord {
                    controller: controller.to_owned(),
                    common: common.clone(),
                    dot11: dot11.get_or_default(&mac),
                    traffic: traffic.get_or_default(&mac),
                    sisf: sisf.get_or_default(&mac),
                    dc: dc.get_or_default(&mac),
                }
            })
            .collect()
    }
}

/// Client stations of every controller, narrowed by SSID and radio slot.
pub async fn clients<C: Connector>(
    connector: &C,
    controllers: &[Controller],
    options: &QueryOptions,
    query: &ClientQuery,
) -> Aggregation<ClientRecord> {
    collect::<Clients, C>(connector, controllers, options)
        .await
        .map_records(|records| apply_filters(records, query))
}

fn apply_filters(records: Vec<ClientRecord>, query: &ClientQuery) -> Vec<ClientRecord> {
    let records = filter_by(records, &query.ssid, |r: &ClientRecord| &r.dot11.vap_ssid);
    filter_by(records, &query.radio_slot, |r: &ClientRecord| {
        &r.common.ms_ap_slot_id
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testing::{MockApi, MockConnector, common, dc, dot11, sisf, traffic};

    fn full_api(macs: &[(&str, &str, u8)]) -> MockApi {
        MockApi {
            common: Some(macs.iter().map(|(m, _, slot)| common(m, *slot)).collect()),
            dot11: Some(macs.iter().map(|(m, ssid, _)| dot11(m, ssid)).collect()),
            traffic: Some(Vec::new()),
            sisf: Some(Vec::new()),
            dc: Some(Vec::new()),
            ..MockApi::default()
        }
    }

    fn macs(agg: &Aggregation<ClientRecord>) -> Vec<&str> {
        agg.records.iter().map(ClientRecord::mac).collect()
    }

    #[tokio::test]
    async fn joins_across_divergent_key_names() {
        let api = MockApi {
            common: Some(vec![common("aa:01", 1)]),
            dot11: Some(vec![dot11("aa:01", "Corp")]),
            traffic: Some(vec![traffic("aa:01", 2048), traffic("aa:01", 1)]),
            sisf: Some(vec![sisf("aa:01", "10.0.0.7")]),
            dc: Some(vec![dc("aa:01", "Phone")]),
            ..MockApi::default()
        };
        let connector = MockConnector::new().with("wnc1", api);

        let agg = clients(
            &connector,
            &connector.controllers(),
            &QueryOptions::default(),
            &ClientQuery::default(),
        )
        .await;

        let record = &agg.records[0];
        assert_eq!(record.ssid(), "Corp");
        assert_eq!(record.traffic.bytes_rx, 2048);
        assert_eq!(record.sisf.ipv4(), "10.0.0.7");
        assert_eq!(record.dc.device_type, "Phone");
    }

    #[tokio::test]
    async fn ssid_filter_keeps_matches_in_order() {
        let api = full_api(&[("aa:01", "Guest", 0), ("aa:02", "Guest", 1), ("aa:03", "Corp", 1)]);
        let connector = MockConnector::new().with("wnc1", api);
        let query = ClientQuery {
            ssid: "Guest".into(),
            ..ClientQuery::default()
        };

        let agg = clients(&connector, &connector.controllers(), &QueryOptions::default(), &query)
            .await;

        assert_eq!(macs(&agg), ["aa:01", "aa:02"]);
    }

    #[tokio::test]
    async fn radio_filter_uses_decimal_slot() {
        let api = full_api(&[("aa:01", "Guest", 0), ("aa:02", "Guest", 1), ("aa:03", "Corp", 1)]);
        let connector = MockConnector::new().with("wnc1", api);
        let query = ClientQuery {
            ssid: "Guest".into(),
            radio_slot: "1".into(),
        };

        let agg = clients(&connector, &connector.controllers(), &QueryOptions::default(), &query)
            .await;

        assert_eq!(macs(&agg), ["aa:02"]);
    }

    #[tokio::test]
    async fn unmatched_filter_is_empty_not_error() {
        let api = full_api(&[("aa:01", "Guest", 0)]);
        let connector = MockConnector::new().with("wnc1", api);
        let query = ClientQuery {
            ssid: "guest".into(),
            ..ClientQuery::default()
        };

        let agg = clients(&connector, &connector.controllers(), &QueryOptions::default(), &query)
            .await;

        assert!(agg.records.is_empty());
        assert!(agg.failures.is_empty());
    }

    #[tokio::test]
    async fn any_missing_list_skips_controller() {
        for missing in 0..5 {
            let mut api = full_api(&[("aa:01", "Guest", 0)]);
            match missing {
                0 => api.common = None,
                1 => api.dot11 = None,
                2 => api.traffic = None,
                3 => api.sisf = None,
                _ => api.dc = None,
            }
            let connector = MockConnector::new().with("wnc1", api);

            let agg = clients(
                &connector,
                &connector.controllers(),
                &QueryOptions::default(),
                &ClientQuery::default(),
            )
            .await;

            assert!(agg.records.is_empty(), "list #{missing} missing");
            assert_eq!(agg.failures.len(), 1);
        }
    }
}
