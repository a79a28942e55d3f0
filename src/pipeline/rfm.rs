//! Customer Recency/Frequency/Monetary segmentation.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::domain::{CustomerId, CustomerRfm, OrderLineRecord, RfmRow};

/// Segment customers by recency, frequency, and monetary value.
///
/// Three independent group-bys over the filtered set are combined by
/// equi-join on the customer:
///
/// 1. frequency: rows per customer (line items, not distinct orders);
/// 2. monetary: sum of `total_order_price` per customer;
/// 3. recency: whole days between each row's timestamp and the window's
///    maximum timestamp, computed per row and joined back on the customer.
///
/// The recency join is one-to-many, so a customer with orders on several
/// days yields one candidate row per order. Rows are sorted ascending by
/// recency and exact duplicates dropped. The table is the deduplicated
/// join, not a per-customer group-by: distinct recency values for the same
/// customer survive, one row each.
#[must_use]
pub fn customer_rfm(records: &[OrderLineRecord]) -> CustomerRfm {
    let Some(max_date) = records.iter().map(|r| r.order_purchase_timestamp).max() else {
        return CustomerRfm::default();
    };

    let mut frequency: BTreeMap<&CustomerId, u64> = BTreeMap::new();
    let mut monetary: BTreeMap<&CustomerId, Decimal> = BTreeMap::new();
    for record in records {
        *frequency.entry(&record.customer_id).or_insert(0) += 1;
        *monetary.entry(&record.customer_id).or_insert(Decimal::ZERO) +=
            record.total_order_price;
    }

    let mut rows: Vec<RfmRow> = records
        .iter()
        .map(|record| RfmRow {
            customer_id: record.customer_id.clone(),
            recency: (max_date - record.order_purchase_timestamp).num_days(),
            frequency: frequency[&record.customer_id],
            monetary: monetary[&record.customer_id],
        })
        .collect();

    rows.sort_by_key(|row| row.recency);

    let mut seen: HashSet<RfmRow> = HashSet::new();
    let rows = rows
        .into_iter()
        .filter(|row| seen.insert(row.clone()))
        .collect();
    CustomerRfm { rows }
}
