//! Analytics-agnostic domain types: identifiers, input rows, derived tables.

mod ids;
mod record;
mod report;

pub use ids::{CustomerId, OrderId, SellerId};
pub use record::{OrderLineRecord, REVIEW_SCORE_MAX, REVIEW_SCORE_MIN};
pub use report::{
    CustomerRfm, DailyBucket, DailySeries, RfmRow, SellerPerformance, SellerPerformanceRow,
    SellerRatingRow, SellerRatings,
};
