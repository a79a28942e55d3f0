//! Orderlens - order analytics over an e-commerce record store.
//!
//! This crate turns a flat table of order/line-item/review rows into the
//! four derived views behind an analytics display: a daily order series,
//! a seller revenue ranking, a seller rating ranking, and a per-customer
//! Recency/Frequency/Monetary segmentation.
//!
//! # Architecture
//!
//! The core is a pure, stateless batch pipeline. Records flow one way:
//!
//! record store → range filter → { daily, sellers, ratings, rfm } → display
//!
//! The four aggregators are mutually independent functions over the same
//! filtered snapshot; nothing is shared or mutated between them, and a
//! fresh report is computed per analysis request.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Identifiers, input rows, and derived table types
//! - [`error`] - Error types for the crate
//! - [`pipeline`] - The range filter and the four aggregators
//! - [`store`] - CSV ingestion with schema validation
//! - [`cli`] - Command-line surface rendering the derived views
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use orderlens::pipeline::{analyze, DateRange};
//!
//! let records = Vec::new();
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2018, 12, 31).unwrap(),
//! );
//! let report = analyze(&records, range);
//! assert!(report.daily.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod store;
