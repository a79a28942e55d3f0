//! Calendar-day bucketing of the filtered record set.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{DailyBucket, DailySeries, OrderId, OrderLineRecord};

#[derive(Default)]
struct DayAccum<'a> {
    orders: HashSet<&'a OrderId>,
    revenue: Decimal,
}

/// Bucket records by calendar day, ascending by date.
///
/// `order_count` is the distinct-order cardinality of the bucket; `revenue`
/// sums `total_order_price` over every row, so an order with N line items
/// contributes its order total N times. The per-row sum is intentional;
/// callers that want order-level revenue must deduplicate by order first.
/// Days with no orders are omitted, not zero-filled.
#[must_use]
pub fn daily_series(records: &[OrderLineRecord]) -> DailySeries {
    let mut days: BTreeMap<NaiveDate, DayAccum> = BTreeMap::new();
    for record in records {
        let entry = days
            .entry(record.order_purchase_timestamp.date())
            .or_default();
        entry.orders.insert(&record.order_id);
        entry.revenue += record.total_order_price;
    }

    let buckets = days
        .into_iter()
        .map(|(date, accum)| DailyBucket {
            date,
            order_count: accum.orders.len() as u64,
            revenue: accum.revenue,
        })
        .collect();
    DailySeries { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, SellerId};
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    fn record(order: &str, ts: &str, total: Decimal) -> OrderLineRecord {
        OrderLineRecord {
            order_id: OrderId::new(order),
            customer_id: CustomerId::new("c1"),
            seller_id: SellerId::new("s1"),
            order_purchase_timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            price: total,
            total_order_price: total,
            review_score: None,
        }
    }

    #[test]
    fn buckets_by_calendar_day_ascending() {
        let records = vec![
            record("b", "2018-01-02 08:00:00", dec!(20)),
            record("a", "2018-01-01 09:00:00", dec!(10)),
        ];
        let series = daily_series(&records);
        assert_eq!(series.buckets.len(), 2);
        assert_eq!(series.buckets[0].date.to_string(), "2018-01-01");
        assert_eq!(series.buckets[1].date.to_string(), "2018-01-02");
    }

    #[test]
    fn counts_distinct_orders_not_rows() {
        // Order "a" has two line items on the same day.
        let records = vec![
            record("a", "2018-01-01 09:00:00", dec!(30)),
            record("a", "2018-01-01 09:00:00", dec!(30)),
            record("b", "2018-01-01 15:00:00", dec!(10)),
        ];
        let series = daily_series(&records);
        assert_eq!(series.buckets[0].order_count, 2);
    }

    #[test]
    fn revenue_sums_order_total_once_per_row() {
        // The order total repeats on each line item and is summed per row.
        let records = vec![
            record("a", "2018-01-01 09:00:00", dec!(30)),
            record("a", "2018-01-01 09:00:00", dec!(30)),
        ];
        let series = daily_series(&records);
        assert_eq!(series.buckets[0].revenue, dec!(60));
    }

    #[test]
    fn empty_days_are_omitted() {
        let records = vec![
            record("a", "2018-01-01 09:00:00", dec!(10)),
            record("b", "2018-01-05 09:00:00", dec!(10)),
        ];
        let series = daily_series(&records);
        assert_eq!(series.buckets.len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(daily_series(&[]).is_empty());
    }
}
