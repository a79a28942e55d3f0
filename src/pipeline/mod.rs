//! The aggregation pipeline: filtered snapshot in, four derived tables out.
//!
//! Each aggregator is a pure, synchronous function of the filtered record
//! set. The pipeline holds no state between invocations and the aggregators
//! share nothing mutable, so they may run in any order (or concurrently)
//! over the same snapshot; re-invocation with identical inputs reproduces
//! identical outputs.

mod daily;
mod filter;
mod rfm;
mod seller;

pub use daily::daily_series;
pub use filter::{filter_range, DateRange};
pub use rfm::customer_rfm;
pub use seller::{seller_performance, seller_ratings};

use tracing::info;

use crate::domain::{CustomerRfm, DailySeries, OrderLineRecord, SellerPerformance, SellerRatings};

/// The four derived tables of one analysis invocation.
///
/// Owned by the request that produced it; discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    pub daily: DailySeries,
    pub seller_performance: SellerPerformance,
    pub seller_ratings: SellerRatings,
    pub customer_rfm: CustomerRfm,
}

/// Run the full pipeline over `records` restricted to `range`.
///
/// An empty or out-of-bounds window yields four empty tables rather than an
/// error; malformed input never reaches this point because schema violations
/// fail at ingestion.
#[must_use]
pub fn analyze(records: &[OrderLineRecord], range: DateRange) -> AnalyticsReport {
    let filtered = filter_range(records, range);
    info!(
        records = filtered.len(),
        start = %range.start(),
        end = %range.end(),
        "running analysis"
    );
    AnalyticsReport {
        daily: daily_series(&filtered),
        seller_performance: seller_performance(&filtered),
        seller_ratings: seller_ratings(&filtered),
        customer_rfm: customer_rfm(&filtered),
    }
}
