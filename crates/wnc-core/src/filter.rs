// ── Filter stage ──
//
// Equality filters over merged records. An empty filter value keeps every
// record; a value that matches nothing yields an empty result, never an
// error. Relative order is preserved, so filters compose in any order.

use tracing::debug;

/// A record field that can be compared against free-text filter input.
pub trait FieldMatch {
    /// Case-sensitive comparison of the field's text form with `value`.
    fn matches(&self, value: &str) -> bool;
}

impl FieldMatch for str {
    fn matches(&self, value: &str) -> bool {
        self == value
    }
}

impl FieldMatch for String {
    fn matches(&self, value: &str) -> bool {
        self.as_str() == value
    }
}

macro_rules! impl_decimal_match {
    ($($ty:ty),*) => {
        $(
            impl FieldMatch for $ty {
                fn matches(&self, value: &str) -> bool {
                    self.to_string() == value
                }
            }
        )*
    };
}

impl_decimal_match!(u8, u16, u32, u64, i64);

/// Keep records whose `field` equals `value`. Empty `value` is a no-op.
pub fn filter_by<T, V, F>(records: Vec<T>, value: &str, field: F) -> Vec<T>
where
    V: FieldMatch + ?Sized,
    F: Fn(&T) -> &V,
{
    if value.is_empty() {
        return records;
    }

    let before = records.len();
    let kept: Vec<T> = records
        .into_iter()
        .filter(|record| field(record).matches(value))
        .collect();
    debug!(value, before, after = kept.len(), "filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Station {
        ssid: String,
        slot: u8,
        id: u32,
    }

    fn station(id: u32, ssid: &str, slot: u8) -> Station {
        Station {
            ssid: ssid.into(),
            slot,
            id,
        }
    }

    fn fixture() -> Vec<Station> {
        vec![
            station(1, "Corp", 0),
            station(2, "Guest", 1),
            station(3, "Corp", 1),
            station(4, "corp", 1),
        ]
    }

    fn ids(records: &[Station]) -> Vec<u32> {
        records.iter().map(|s| s.id).collect()
    }

    #[test]
    fn empty_value_is_identity() {
        assert_eq!(filter_by(fixture(), "", |s: &Station| &s.ssid), fixture());
    }

    #[test]
    fn exact_case_sensitive_match() {
        let kept = filter_by(fixture(), "Corp", |s: &Station| &s.ssid);
        assert_eq!(ids(&kept), [1, 3]);
    }

    #[test]
    fn numeric_field_compares_decimal_text() {
        let kept = filter_by(fixture(), "1", |s: &Station| &s.slot);
        assert_eq!(ids(&kept), [2, 3, 4]);
        assert!(filter_by(fixture(), "01", |s: &Station| &s.slot).is_empty());
    }

    #[test]
    fn unmatched_value_yields_empty() {
        assert!(filter_by(fixture(), "Lab", |s: &Station| &s.ssid).is_empty());
    }

    #[test]
    fn empty_input_stays_empty() {
        let none: Vec<Station> = Vec::new();
        assert!(filter_by(none, "Corp", |s: &Station| &s.ssid).is_empty());
    }

    #[test]
    fn filters_commute() {
        let ssid_first = filter_by(
            filter_by(fixture(), "Corp", |s: &Station| &s.ssid),
            "1",
            |s: &Station| &s.slot,
        );
        let slot_first = filter_by(
            filter_by(fixture(), "1", |s: &Station| &s.slot),
            "Corp",
            |s: &Station| &s.ssid,
        );
        assert_eq!(ssid_first, slot_first);
        assert_eq!(ids(&ssid_first), [3]);
    }
}
