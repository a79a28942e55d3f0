//! The input row type consumed by the analytics pipeline.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use super::{CustomerId, OrderId, SellerId};

/// Lowest review score the record store accepts.
pub const REVIEW_SCORE_MIN: u8 = 1;

/// Highest review score the record store accepts.
pub const REVIEW_SCORE_MAX: u8 = 5;

/// One line item of an order, as loaded from the record store.
///
/// `order_id` is not a unique row key: an order spanning several line items
/// (and sellers) repeats it on every row, with `total_order_price` constant
/// across those rows. Rows are immutable after load; every derived table is
/// computed fresh from a snapshot of these rows.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    /// Seller fulfilling this line item.
    pub seller_id: SellerId,
    /// Order creation instant, shared by all rows of the order.
    pub order_purchase_timestamp: NaiveDateTime,
    /// Line-item price.
    pub price: Decimal,
    /// Order-level total, repeated on every line item of the order.
    pub total_order_price: Decimal,
    /// Review score for the order; `None` when no review was submitted.
    pub review_score: Option<u8>,
}
