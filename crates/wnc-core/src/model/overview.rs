// ── Per-radio overview ──

use std::cmp::Ordering;

use serde::Serialize;
use strum::{Display, EnumString};
use tracing::warn;
use wnc_api::models::{CapwapData, RadioBand, RadioOperData, RfTag, RrmMeasurement};

use crate::sort::{SortKey, SortOrder};

/// One radio slot with its AP, RF tag and RRM load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewRecord {
    pub controller: String,
    pub radio: RadioOperData,
    pub capwap: CapwapData,
    pub rf_tag: RfTag,
    pub measurement: RrmMeasurement,
    pub band: RadioBand,
    /// RF profile of the radio's band, taken from `rf_tag`.
    pub rf_profile: String,
}

impl OverviewRecord {
    pub fn ap_name(&self) -> &str {
        &self.capwap.name
    }

    pub fn radio_mac(&self) -> &str {
        &self.radio.wtp_mac
    }

    pub fn client_count(&self) -> u32 {
        self.measurement.load.stations
    }
}

/// Pick the RF profile name that applies to `band`.
pub fn rf_profile_for_band(tag: &RfTag, band: RadioBand) -> &str {
    match band {
        RadioBand::TwoPointFourGhz => &tag.dot11b_rf_profile_name,
        RadioBand::FiveGhz => &tag.dot11a_rf_profile_name,
        RadioBand::SixGhz => &tag.dot11_6ghz_rf_prof_name,
        RadioBand::Unknown => "",
    }
}

/// Fields the overview can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum OverviewSortKey {
    /// AP name.
    Name,
    /// Radio MAC.
    Mac,
    /// Channel width in MHz.
    ChannelWidth,
    /// Transmit power in dBm.
    TxPower,
    /// Associated stations.
    ClientCount,
}

impl OverviewSortKey {
    /// Resolve free-text input. Empty input means "no sort"; anything else
    /// that is not a known key is logged and also means "no sort".
    pub fn lenient(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match input.parse() {
            Ok(key) => Some(key),
            Err(_) => {
                warn!(sort_by = input, "unknown sort key, keeping controller order");
                None
            }
        }
    }
}

impl SortKey<OverviewRecord> for OverviewSortKey {
    fn compare(&self, a: &OverviewRecord, b: &OverviewRecord) -> Ordering {
        match self {
            Self::Name => a.ap_name().cmp(b.ap_name()),
            Self::Mac => a.radio_mac().cmp(b.radio_mac()),
            Self::ChannelWidth => a.radio.channel_width_mhz().cmp(&b.radio.channel_width_mhz()),
            Self::TxPower => a.radio.tx_power_dbm().cmp(&b.radio.tx_power_dbm()),
            Self::ClientCount => a.client_count().cmp(&b.client_count()),
        }
    }
}

/// Overview filter and ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewQuery {
    /// Empty string disables the filter.
    pub radio_slot: String,
    pub sort_by: Option<OverviewSortKey>,
    pub order: SortOrder,
}
