// ── Per-radio overview aggregator ──
//
// Four collections, three key shapes:
//
//   radio-oper-data   primary      RadioKey (wtp-mac, radio-slot-id)
//   rrm-measurement   secondary    RadioKey
//   capwap-data       secondary    wtp-mac only; one AP serves every slot
//   rf-tag            secondary    tag-name, taken from the matched CAPWAP
//                                  record's tag-info, not from the radio

use wnc_api::models::{CapwapData, RadioOperData, RfTag, RrmMeasurement};

use super::{Aggregation, Aggregator, FetchFailure, ForCollection, collect};
use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::filter::filter_by;
use crate::join::FirstMatchIndex;
use crate::model::overview::rf_profile_for_band;
use crate::model::{OverviewQuery, OverviewRecord};
use crate::sort::sort_records;
use crate::source::{Connector, WirelessApi};

/// Identity of one radio: AP base MAC plus slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadioKey<'a> {
    pub mac: &'a str,
    pub slot: u8,
}

impl<'a> RadioKey<'a> {
    fn of_radio(radio: &'a RadioOperData) -> Self {
        Self {
            mac: &radio.wtp_mac,
            slot: radio.radio_slot_id,
        }
    }

    fn of_measurement(measurement: &'a RrmMeasurement) -> Self {
        Self {
            mac: &measurement.wtp_mac,
            slot: measurement.radio_slot_id,
        }
    }
}

pub(crate) struct Overview;

pub(crate) struct OverviewBundle {
    radios: Vec<RadioOperData>,
    capwap: Vec<CapwapData>,
    rf_tags: Vec<RfTag>,
    measurements: Vec<RrmMeasurement>,
}

impl Aggregator for Overview {
    const ENTITY: &'static str = "overview";
    type Bundle = OverviewBundle;
    type Record = OverviewRecord;

    async fn fetch<A: WirelessApi>(api: &A) -> Result<OverviewBundle, FetchFailure> {
        Ok(OverviewBundle {
            radios: api.radio_oper_data().await.for_collection("radio-oper-data")?,
            capwap: api.capwap_data().await.for_collection("capwap-data")?,
            rf_tags: api.rf_tags().await.for_collection("rf-tag")?,
            measurements: api.rrm_measurements().await.for_collection("rrm-measurement")?,
        })
    }

    fn merge(controller: &str, bundle: OverviewBundle) -> Vec<OverviewRecord> {
        let aps = FirstMatchIndex::build(&bundle.capwap, |c| c.wtp_mac.as_str());
        let rf_tags = FirstMatchIndex::build(&bundle.rf_tags, |t| t.tag_name.as_str());
        let measurements = FirstMatchIndex::build(&bundle.measurements, RadioKey::of_measurement);

        bundle
            .radios
            .iter()
            .map(|radio| {
                let capwap = aps.get_or_default(&radio.wtp_mac.as_str());
                let rf_tag = rf_tags.get_or_default(&capwap.tag_info.rf_tag.rf_tag_name.as_str());
                let band = radio.band();
                OverviewRecord {
                    controller: controller.to_owned(),
                    radio: radio.clone(),
                    measurement: measurements.get_or_default(&RadioKey::of_radio(radio)),
                    rf_profile: rf_profile_for_band(&rf_tag, band).to_owned(),
                    band,
                    capwap,
                    rf_tag,
                }
            })
            .collect()
    }
}

/// One row per radio across the fleet, filtered by slot and sorted.
pub async fn overview<C: Connector>(
    connector: &C,
    controllers: &[Controller],
    options: &QueryOptions,
    query: &OverviewQuery,
) -> Aggregation<OverviewRecord> {
    collect::<Overview, C>(connector, controllers, options)
        .await
        .map_records(|records| {
            let mut records = filter_by(records, &query.radio_slot, |r: &OverviewRecord| {
                &r.radio.radio_slot_id
            });
            sort_records(&mut records, query.sort_by.as_ref(), query.order);
            records
        })
}
