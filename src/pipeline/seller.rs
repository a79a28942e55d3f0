//! Per-seller revenue and rating rankings.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::domain::{
    OrderId, OrderLineRecord, SellerId, SellerPerformance, SellerPerformanceRow, SellerRatingRow,
    SellerRatings,
};

#[derive(Default)]
struct PerformanceAccum<'a> {
    revenue: Decimal,
    orders: HashSet<&'a OrderId>,
}

/// Rank sellers by line-item revenue.
///
/// `revenue` sums `price`, which is per line item and therefore not
/// double-counted across an order's rows. `order_count` is the seller's
/// distinct-order cardinality. Sorted descending by revenue, ties broken
/// descending by order count; the worst performers are the tail of the same
/// ranking, not a separate computation.
#[must_use]
pub fn seller_performance(records: &[OrderLineRecord]) -> SellerPerformance {
    let mut sellers: BTreeMap<&SellerId, PerformanceAccum> = BTreeMap::new();
    for record in records {
        let entry = sellers.entry(&record.seller_id).or_default();
        entry.revenue += record.price;
        entry.orders.insert(&record.order_id);
    }

    let mut rows: Vec<SellerPerformanceRow> = sellers
        .into_iter()
        .map(|(seller_id, accum)| SellerPerformanceRow {
            seller_id: seller_id.clone(),
            revenue: accum.revenue,
            order_count: accum.orders.len() as u64,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then(b.order_count.cmp(&a.order_count))
    });
    SellerPerformance { rows }
}

#[derive(Default)]
struct RatingAccum<'a> {
    score_sum: u64,
    reviewed_rows: u64,
    orders: HashSet<&'a OrderId>,
    revenue: Decimal,
}

/// Rank sellers by mean review score.
///
/// Rows without a score are dropped before grouping, so a seller with no
/// reviewed order inside the window is absent from the table rather than
/// carried at zero. Sorted descending by rating, ties broken descending by
/// revenue, then order count.
#[must_use]
pub fn seller_ratings(records: &[OrderLineRecord]) -> SellerRatings {
    let mut sellers: BTreeMap<&SellerId, RatingAccum> = BTreeMap::new();
    for record in records {
        let Some(score) = record.review_score else {
            continue;
        };
        let entry = sellers.entry(&record.seller_id).or_default();
        entry.score_sum += u64::from(score);
        entry.reviewed_rows += 1;
        entry.orders.insert(&record.order_id);
        entry.revenue += record.price;
    }

    let mut rows: Vec<SellerRatingRow> = sellers
        .into_iter()
        .map(|(seller_id, accum)| SellerRatingRow {
            seller_id: seller_id.clone(),
            rating: accum.score_sum as f64 / accum.reviewed_rows as f64,
            order_count: accum.orders.len() as u64,
            revenue: accum.revenue,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then(b.revenue.cmp(&a.revenue))
            .then(b.order_count.cmp(&a.order_count))
    });
    SellerRatings { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CustomerId;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    fn record(order: &str, seller: &str, price: Decimal, score: Option<u8>) -> OrderLineRecord {
        OrderLineRecord {
            order_id: OrderId::new(order),
            customer_id: CustomerId::new("c1"),
            seller_id: SellerId::new(seller),
            order_purchase_timestamp: NaiveDateTime::parse_from_str(
                "2018-01-01 09:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            price,
            total_order_price: price,
            review_score: score,
        }
    }

    #[test]
    fn performance_groups_and_ranks_by_revenue() {
        let records = vec![
            record("a", "s1", dec!(10), None),
            record("b", "s1", dec!(20), None),
            record("c", "s2", dec!(5), None),
        ];
        let table = seller_performance(&records);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].seller_id.as_str(), "s1");
        assert_eq!(table.rows[0].revenue, dec!(30));
        assert_eq!(table.rows[0].order_count, 2);
        assert_eq!(table.rows[1].seller_id.as_str(), "s2");
    }

    #[test]
    fn performance_counts_distinct_orders() {
        // Two line items of the same order.
        let records = vec![
            record("a", "s1", dec!(10), None),
            record("a", "s1", dec!(15), None),
        ];
        let table = seller_performance(&records);
        assert_eq!(table.rows[0].order_count, 1);
        assert_eq!(table.rows[0].revenue, dec!(25));
    }

    #[test]
    fn performance_revenue_tie_breaks_on_order_count() {
        let records = vec![
            record("a", "s1", dec!(10), None),
            record("b", "s2", dec!(5), None),
            record("c", "s2", dec!(5), None),
        ];
        let table = seller_performance(&records);
        assert_eq!(table.rows[0].seller_id.as_str(), "s2");
        assert_eq!(table.rows[1].seller_id.as_str(), "s1");
    }

    #[test]
    fn ratings_exclude_unreviewed_rows() {
        let records = vec![
            record("a", "s1", dec!(10), Some(5)),
            record("b", "s1", dec!(20), None),
        ];
        let table = seller_ratings(&records);
        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row.rating, 5.0);
        assert_eq!(row.order_count, 1);
        assert_eq!(row.revenue, dec!(10));
    }

    #[test]
    fn ratings_omit_sellers_with_no_reviews() {
        let records = vec![
            record("a", "s1", dec!(10), Some(4)),
            record("b", "s2", dec!(20), None),
        ];
        let table = seller_ratings(&records);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].seller_id.as_str(), "s1");
    }

    #[test]
    fn ratings_average_scores() {
        let records = vec![
            record("a", "s1", dec!(10), Some(5)),
            record("b", "s1", dec!(10), Some(2)),
        ];
        let table = seller_ratings(&records);
        assert_eq!(table.rows[0].rating, 3.5);
    }

    #[test]
    fn ratings_rank_by_rating_then_revenue() {
        let records = vec![
            record("a", "s1", dec!(5), Some(4)),
            record("b", "s2", dec!(50), Some(4)),
            record("c", "s3", dec!(1), Some(5)),
        ];
        let table = seller_ratings(&records);
        assert_eq!(table.rows[0].seller_id.as_str(), "s3");
        assert_eq!(table.rows[1].seller_id.as_str(), "s2");
        assert_eq!(table.rows[2].seller_id.as_str(), "s1");
    }

    #[test]
    fn empty_input_yields_empty_tables() {
        assert!(seller_performance(&[]).is_empty());
        assert!(seller_ratings(&[]).is_empty());
    }
}
