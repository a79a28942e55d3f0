//! Record store ingestion.
//!
//! The pipeline itself consumes an in-memory table; this module is the thin
//! loading edge that turns the store's CSV export into typed rows. Schema
//! violations are fatal here: a missing column or an unparseable field stops
//! the load before any derived table is produced.

use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{
    CustomerId, OrderId, OrderLineRecord, SellerId, REVIEW_SCORE_MAX, REVIEW_SCORE_MIN,
};
use crate::error::{Result, SchemaError};

const COL_ORDER_ID: &str = "order_id";
const COL_CUSTOMER_ID: &str = "customer_id";
const COL_SELLER_ID: &str = "seller_id";
const COL_PURCHASE_TS: &str = "order_purchase_timestamp";
const COL_PRICE: &str = "price";
const COL_TOTAL_PRICE: &str = "total_order_price";
const COL_REVIEW_SCORE: &str = "review_score";

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Header positions of the required columns.
struct ColumnIndex {
    order_id: usize,
    customer_id: usize,
    seller_id: usize,
    purchase_ts: usize,
    price: usize,
    total_price: usize,
    review_score: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> std::result::Result<Self, SchemaError> {
        Ok(Self {
            order_id: locate(headers, COL_ORDER_ID)?,
            customer_id: locate(headers, COL_CUSTOMER_ID)?,
            seller_id: locate(headers, COL_SELLER_ID)?,
            purchase_ts: locate(headers, COL_PURCHASE_TS)?,
            price: locate(headers, COL_PRICE)?,
            total_price: locate(headers, COL_TOTAL_PRICE)?,
            review_score: locate(headers, COL_REVIEW_SCORE)?,
        })
    }
}

fn locate(
    headers: &csv::StringRecord,
    column: &'static str,
) -> std::result::Result<usize, SchemaError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(SchemaError::MissingColumn { column })
}

/// Load the order table from a CSV export.
///
/// Column order is irrelevant; columns are located by header name. A blank
/// `review_score` field is an absent review, not an error.
pub fn load_records(path: &Path) -> Result<Vec<OrderLineRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row?;
        // Data rows are 1-based; row 0 is the header.
        records.push(parse_row(&columns, &row, idx + 1)?);
    }

    info!(
        rows = records.len(),
        path = %path.display(),
        "loaded order records"
    );
    Ok(records)
}

fn parse_row(
    columns: &ColumnIndex,
    row: &csv::StringRecord,
    line: usize,
) -> std::result::Result<OrderLineRecord, SchemaError> {
    let field = |idx: usize| row.get(idx).unwrap_or("").trim();

    Ok(OrderLineRecord {
        order_id: OrderId::new(field(columns.order_id)),
        customer_id: CustomerId::new(field(columns.customer_id)),
        seller_id: SellerId::new(field(columns.seller_id)),
        order_purchase_timestamp: parse_timestamp(line, field(columns.purchase_ts))?,
        price: parse_decimal(line, COL_PRICE, field(columns.price))?,
        total_order_price: parse_decimal(line, COL_TOTAL_PRICE, field(columns.total_price))?,
        review_score: parse_score(line, field(columns.review_score))?,
    })
}

fn parse_timestamp(line: usize, value: &str) -> std::result::Result<NaiveDateTime, SchemaError> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ts);
        }
    }
    // Date-only exports truncate to midnight.
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| SchemaError::InvalidTimestamp {
            row: line,
            value: value.to_string(),
        })
}

fn parse_decimal(
    line: usize,
    column: &'static str,
    value: &str,
) -> std::result::Result<Decimal, SchemaError> {
    Decimal::from_str(value).map_err(|_| SchemaError::InvalidNumber {
        row: line,
        column,
        value: value.to_string(),
    })
}

/// Parse a review score.
///
/// Scores may be exported as integers ("4") or floats ("4.0"); both must be
/// whole numbers inside the accepted bound.
fn parse_score(line: usize, value: &str) -> std::result::Result<Option<u8>, SchemaError> {
    if value.is_empty() {
        return Ok(None);
    }

    let invalid = || SchemaError::InvalidNumber {
        row: line,
        column: COL_REVIEW_SCORE,
        value: value.to_string(),
    };

    let score: f64 = value.parse().map_err(|_| invalid())?;
    if !score.is_finite() || score.fract() != 0.0 || !(0.0..=255.0).contains(&score) {
        return Err(invalid());
    }

    let score = score as u8;
    if !(REVIEW_SCORE_MIN..=REVIEW_SCORE_MAX).contains(&score) {
        return Err(SchemaError::ScoreOutOfBounds {
            row: line,
            value: score,
            min: REVIEW_SCORE_MIN,
            max: REVIEW_SCORE_MAX,
        });
    }
    Ok(Some(score))
}
