// ── Sort stage ──
//
// Stable ordering of merged records. Ties keep their pre-sort relative
// order in both directions: descending reverses the comparator, not the
// output.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// A named ordering over records of type `T`.
pub trait SortKey<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Sort `records` in place. `None` leaves the input order untouched.
pub fn sort_records<T, K>(records: &mut [T], key: Option<&K>, order: SortOrder)
where
    K: SortKey<T> + ?Sized,
{
    let Some(key) = key else {
        return;
    };

    match order {
        SortOrder::Asc => records.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => records.sort_by(|a, b| key.compare(b, a)),
    }
    debug!(count = records.len(), %order, "records sorted");
}
