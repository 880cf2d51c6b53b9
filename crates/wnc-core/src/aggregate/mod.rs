// ── Fleet aggregation driver ──
//
// Every entity runs through the same per-controller pipeline:
//
//   connect -> fetch each required collection -> merge -> accumulate
//
// Fetches inside one controller run one after another and stop at the first
// failure; that controller then contributes nothing and is reported in
// `Aggregation::failures`. Controllers run through an order-preserving
// buffered stream, so records always come out in controller list order no
// matter how many run at once.

pub mod ap;
pub mod ap_tag;
pub mod client;
pub mod overview;
pub mod wlan;

use std::future::Future;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};
use wnc_api::Error as ApiError;

use crate::config::QueryOptions;
use crate::controller::Controller;
use crate::source::{Connector, WirelessApi};

pub use ap::access_points;
pub use ap_tag::ap_tags;
pub use client::clients;
pub use overview::overview;
pub use wlan::wlans;

/// A controller that contributed no records, and why.
#[derive(Debug)]
pub struct ControllerFailure {
    pub controller: String,
    /// Collection whose fetch failed, or `"connect"` when no client could be built.
    pub collection: &'static str,
    pub error: ApiError,
}

/// Combined output of one aggregation run.
#[derive(Debug)]
pub struct Aggregation<T> {
    /// Merged records in controller list order. Empty, never absent.
    pub records: Vec<T>,
    pub failures: Vec<ControllerFailure>,
}

impl<T> Default for Aggregation<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Aggregation<T> {
    /// Replace the record list, e.g. with a filtered or sorted copy.
    pub fn map_records<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Vec<T>) -> Vec<T>,
    {
        self.records = f(self.records);
        self
    }
}

// ── Per-entity contract ─────────────────────────────────────────────

/// Fetch error tagged with the collection that produced it.
#[derive(Debug)]
pub(crate) struct FetchFailure {
    pub collection: &'static str,
    pub error: ApiError,
}

pub(crate) trait ForCollection<T> {
    fn for_collection(self, collection: &'static str) -> Result<T, FetchFailure>;
}

impl<T> ForCollection<T> for Result<T, ApiError> {
    fn for_collection(self, collection: &'static str) -> Result<T, FetchFailure> {
        self.map_err(|error| FetchFailure { collection, error })
    }
}

/// Fetch and join for one entity.
///
/// `fetch` must return on the first failed collection; `merge` only ever
/// sees a complete bundle.
pub(crate) trait Aggregator {
    const ENTITY: &'static str;

    /// Every collection the entity needs, as fetched.
    type Bundle: Send;
    type Record: Send;

    fn fetch<A: WirelessApi>(
        api: &A,
    ) -> impl Future<Output = Result<Self::Bundle, FetchFailure>> + Send;

    fn merge(controller: &str, bundle: Self::Bundle) -> Vec<Self::Record>;
}

/// Run `G` against every controller and concatenate the results.
pub(crate) async fn collect<G, C>(
    connector: &C,
    controllers: &[Controller],
    options: &QueryOptions,
) -> Aggregation<G::Record>
where
    G: Aggregator,
    C: Connector,
{
    debug!(
        entity = G::ENTITY,
        controllers = controllers.len(),
        parallelism = options.parallelism,
        "aggregating"
    );

    let outcomes: Vec<_> = stream::iter(controllers)
        .map(|controller| from_controller::<G, C>(connector, controller, options))
        .buffered(options.parallelism.max(1))
        .collect()
        .await;

    let mut aggregation = Aggregation::default();
    for outcome in outcomes {
        match outcome {
            Ok(records) => aggregation.records.extend(records),
            Err(failure) => aggregation.failures.push(failure),
        }
    }
    aggregation
}

async fn from_controller<G, C>(
    connector: &C,
    controller: &Controller,
    options: &QueryOptions,
) -> Result<Vec<G::Record>, ControllerFailure>
where
    G: Aggregator,
    C: Connector,
{
    let host = controller.hostname.as_str();

    let api = connector
        .connect(controller, options)
        .for_collection("connect")
        .map_err(|failure| skipped::<G>(host, failure))?;
    let bundle = G::fetch(&api)
        .await
        .map_err(|failure| skipped::<G>(host, failure))?;

    let records = G::merge(host, bundle);
    info!(
        controller = host,
        entity = G::ENTITY,
        records = records.len(),
        "controller merged"
    );
    Ok(records)
}

fn skipped<G: Aggregator>(controller: &str, failure: FetchFailure) -> ControllerFailure {
    warn!(
        controller,
        entity = G::ENTITY,
        collection = failure.collection,
        error = %failure.error,
        "skipping controller"
    );
    ControllerFailure {
        controller: controller.to_owned(),
        collection: failure.collection,
        error: failure.error,
    }
}
