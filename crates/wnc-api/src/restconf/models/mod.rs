// RESTCONF response types
//
// Typed records for the YANG data nodes the CLI reads. Every struct uses
// container-level `#[serde(default)]` and derives `Default`: the controller
// omits empty leaves, and the core uses `Default` as the zero-valued
// placeholder when a join finds no match.

pub mod access_point;
pub mod client;
pub mod rf;
pub mod rrm;
pub mod wlan;

pub use access_point::{
    ApLocation, ApOperData, ApState, ApSysStats, ApTimeInfo, CapwapData, DeviceDetail,
    LldpNeighbor, PolicyTagInfo, RadioBand, RadioBandInfo, RadioOperData, RfTagRef, SiteTag,
    TagInfo,
};
pub use client::{CommonOperData, DcInfo, Dot11OperData, SisfDbMac, TrafficStats};
pub use rf::RfTag;
pub use rrm::{RrmLoad, RrmMeasurement};
pub use wlan::{
    PolicyAssociation, PolicyListEntry, WlanCfgData, WlanCfgEntry, WlanPolicy,
};

/// Lenient numeric decoding.
///
/// YANG 64-bit integers are encoded as JSON strings in RESTCONF, while
/// smaller widths arrive as numbers. Firmware is not consistent about
/// which is which, so counters accept both.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString<N> {
        Num(N),
        Str(String),
    }

    pub(crate) fn u64<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
        match NumOrString::<u64>::deserialize(de)? {
            NumOrString::Num(n) => Ok(n),
            NumOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }

    pub(crate) fn i64<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
        match NumOrString::<i64>::deserialize(de)? {
            NumOrString::Num(n) => Ok(n),
            NumOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn counters_accept_strings_and_numbers() {
        let a: TrafficStats = serde_json::from_str(
            r#"{"ms-mac-address":"aa:bb:cc:00:00:01","bytes-rx":"1024","bytes-tx":2048}"#,
        )
        .unwrap();
        assert_eq!(a.bytes_rx, 1024);
        assert_eq!(a.bytes_tx, 2048);
    }

    #[test]
    fn missing_leaves_decode_to_defaults() {
        let cap: CapwapData = serde_json::from_str(r#"{"wtp-mac":"aa:aa"}"#).unwrap();
        assert_eq!(cap.wtp_mac, "aa:aa");
        assert!(cap.name.is_empty());
        assert!(cap.tag_info.rf_tag.rf_tag_name.is_empty());
    }
}
