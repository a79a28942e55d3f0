//! Shared fixtures for integration tests.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use orderlens::domain::{CustomerId, OrderId, OrderLineRecord, SellerId};

/// Build an input row from literals.
pub fn record(
    order: &str,
    customer: &str,
    seller: &str,
    ts: &str,
    price: Decimal,
    total: Decimal,
    score: Option<u8>,
) -> OrderLineRecord {
    OrderLineRecord {
        order_id: OrderId::new(order),
        customer_id: CustomerId::new(customer),
        seller_id: SellerId::new(seller),
        order_purchase_timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
            .expect("valid fixture timestamp"),
        price,
        total_order_price: total,
        review_score: score,
    }
}
