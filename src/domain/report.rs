//! Derived tables produced by the analytics pipeline.
//!
//! Each table is an ordered sequence of typed rows plus the scalar summary
//! and ranked-slice accessors the display layer consumes. Tables are owned
//! by the invocation that produced them and are never mutated in place.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{CustomerId, SellerId};

/// One calendar-day bucket of the daily order series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBucket {
    pub date: NaiveDate,
    /// Distinct orders placed that day.
    pub order_count: u64,
    /// Sum of `total_order_price` over every row of the day. An order with
    /// N line items contributes its total N times; see `daily_series`.
    pub revenue: Decimal,
}

/// Daily order series, ascending by date. Days without orders are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySeries {
    pub buckets: Vec<DailyBucket>,
}

impl DailySeries {
    /// Distinct orders summed over every bucket.
    #[must_use]
    pub fn total_orders(&self) -> u64 {
        self.buckets.iter().map(|b| b.order_count).sum()
    }

    /// Revenue summed over every bucket.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.buckets.iter().map(|b| b.revenue).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// One seller's revenue/order-count aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerPerformanceRow {
    pub seller_id: SellerId,
    /// Sum of line-item prices across the seller's rows.
    pub revenue: Decimal,
    /// Distinct orders involving the seller.
    pub order_count: u64,
}

/// Sellers ranked descending by revenue, ties broken by order count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerPerformance {
    pub rows: Vec<SellerPerformanceRow>,
}

impl SellerPerformance {
    /// Best-performing sellers: the first `k` rows of the ranking.
    #[must_use]
    pub fn top(&self, k: usize) -> &[SellerPerformanceRow] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// Worst-performing sellers: the last `k` rows, weakest first.
    #[must_use]
    pub fn bottom(&self, k: usize) -> Vec<&SellerPerformanceRow> {
        self.rows.iter().rev().take(k).collect()
    }

    /// Revenue summed over every seller.
    #[must_use]
    pub fn total_revenue(&self) -> Decimal {
        self.rows.iter().map(|r| r.revenue).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One seller's review aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerRatingRow {
    pub seller_id: SellerId,
    /// Arithmetic mean of the seller's review scores.
    pub rating: f64,
    /// Distinct reviewed orders involving the seller.
    pub order_count: u64,
    /// Sum of line-item prices across the seller's reviewed rows.
    pub revenue: Decimal,
}

/// Sellers with at least one reviewed order, ranked descending by rating,
/// ties broken by revenue, then order count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerRatings {
    pub rows: Vec<SellerRatingRow>,
}

impl SellerRatings {
    /// Best-rated sellers: the first `k` rows of the ranking.
    #[must_use]
    pub fn top(&self, k: usize) -> &[SellerRatingRow] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// Worst-rated sellers: the last `k` rows, weakest first.
    #[must_use]
    pub fn bottom(&self, k: usize) -> Vec<&SellerRatingRow> {
        self.rows.iter().rev().take(k).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One customer segment row.
///
/// A customer whose orders fall on different days keeps one row per distinct
/// recency value, so `customer_id` is not unique across the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RfmRow {
    pub customer_id: CustomerId,
    /// Whole days between this row's order and the window's latest order.
    pub recency: i64,
    /// Input rows contributed by the customer (line items, not orders).
    pub frequency: u64,
    /// Sum of `total_order_price` over the customer's rows.
    pub monetary: Decimal,
}

/// Customer RFM segmentation, ascending by recency, exact-duplicate rows
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRfm {
    pub rows: Vec<RfmRow>,
}

impl CustomerRfm {
    /// Mean recency in days, `None` for an empty table.
    #[must_use]
    pub fn mean_recency(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let total: i64 = self.rows.iter().map(|r| r.recency).sum();
        Some(total as f64 / self.rows.len() as f64)
    }

    /// Mean frequency, `None` for an empty table.
    #[must_use]
    pub fn mean_frequency(&self) -> Option<f64> {
        if self.rows.is_empty() {
            return None;
        }
        let total: u64 = self.rows.iter().map(|r| r.frequency).sum();
        Some(total as f64 / self.rows.len() as f64)
    }

    /// Mean monetary value, `None` for an empty table.
    #[must_use]
    pub fn mean_monetary(&self) -> Option<Decimal> {
        if self.rows.is_empty() {
            return None;
        }
        let total: Decimal = self.rows.iter().map(|r| r.monetary).sum();
        Some(total / Decimal::from(self.rows.len() as u64))
    }

    /// Most recent customers: the first `k` rows (the table is already
    /// ascending by recency).
    #[must_use]
    pub fn top_by_recency(&self, k: usize) -> &[RfmRow] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// The `k` rows with the highest frequency.
    #[must_use]
    pub fn top_by_frequency(&self, k: usize) -> Vec<&RfmRow> {
        let mut rows: Vec<&RfmRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        rows.truncate(k);
        rows
    }

    /// The `k` rows with the highest monetary value.
    #[must_use]
    pub fn top_by_monetary(&self, k: usize) -> Vec<&RfmRow> {
        let mut rows: Vec<&RfmRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.monetary.cmp(&a.monetary));
        rows.truncate(k);
        rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn performance_rows() -> SellerPerformance {
        SellerPerformance {
            rows: vec![
                SellerPerformanceRow {
                    seller_id: SellerId::new("s1"),
                    revenue: dec!(30),
                    order_count: 3,
                },
                SellerPerformanceRow {
                    seller_id: SellerId::new("s2"),
                    revenue: dec!(20),
                    order_count: 2,
                },
                SellerPerformanceRow {
                    seller_id: SellerId::new("s3"),
                    revenue: dec!(10),
                    order_count: 1,
                },
            ],
        }
    }

    #[test]
    fn top_returns_leading_rows() {
        let table = performance_rows();
        let top = table.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].seller_id.as_str(), "s1");
        assert_eq!(top[1].seller_id.as_str(), "s2");
    }

    #[test]
    fn bottom_returns_trailing_rows_weakest_first() {
        let table = performance_rows();
        let bottom = table.bottom(2);
        assert_eq!(bottom.len(), 2);
        assert_eq!(bottom[0].seller_id.as_str(), "s3");
        assert_eq!(bottom[1].seller_id.as_str(), "s2");
    }

    #[test]
    fn top_clamps_to_table_size() {
        let table = performance_rows();
        assert_eq!(table.top(10).len(), 3);
        assert_eq!(table.bottom(10).len(), 3);
    }

    #[test]
    fn daily_series_totals() {
        let series = DailySeries {
            buckets: vec![
                DailyBucket {
                    date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
                    order_count: 1,
                    revenue: dec!(10),
                },
                DailyBucket {
                    date: NaiveDate::from_ymd_opt(2018, 1, 2).unwrap(),
                    order_count: 2,
                    revenue: dec!(25),
                },
            ],
        };
        assert_eq!(series.total_orders(), 3);
        assert_eq!(series.total_revenue(), dec!(35));
    }

    #[test]
    fn rfm_means_over_rows() {
        let table = CustomerRfm {
            rows: vec![
                RfmRow {
                    customer_id: CustomerId::new("c1"),
                    recency: 0,
                    frequency: 2,
                    monetary: dec!(30),
                },
                RfmRow {
                    customer_id: CustomerId::new("c2"),
                    recency: 2,
                    frequency: 1,
                    monetary: dec!(10),
                },
            ],
        };
        assert_eq!(table.mean_recency(), Some(1.0));
        assert_eq!(table.mean_frequency(), Some(1.5));
        assert_eq!(table.mean_monetary(), Some(dec!(20)));
    }

    #[test]
    fn rfm_means_are_none_when_empty() {
        let table = CustomerRfm::default();
        assert_eq!(table.mean_recency(), None);
        assert_eq!(table.mean_frequency(), None);
        assert_eq!(table.mean_monetary(), None);
    }

    #[test]
    fn rfm_top_by_frequency_sorts_descending() {
        let table = CustomerRfm {
            rows: vec![
                RfmRow {
                    customer_id: CustomerId::new("c1"),
                    recency: 0,
                    frequency: 1,
                    monetary: dec!(5),
                },
                RfmRow {
                    customer_id: CustomerId::new("c2"),
                    recency: 1,
                    frequency: 4,
                    monetary: dec!(50),
                },
            ],
        };
        let top = table.top_by_frequency(1);
        assert_eq!(top[0].customer_id.as_str(), "c2");
        let top = table.top_by_monetary(1);
        assert_eq!(top[0].customer_id.as_str(), "c2");
    }
}
