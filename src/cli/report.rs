//! Handlers for the analysis subcommands.

use tabled::{Table, Tabled};

use crate::cli::{output, AnalysisArgs};
use crate::config::Config;
use crate::domain::{RfmRow, SellerPerformanceRow, SellerRatingRow};
use crate::error::Result;
use crate::pipeline::{analyze, AnalyticsReport, DateRange};
use crate::store;

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Orders")]
    orders: u64,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

#[derive(Tabled)]
struct SellerRow {
    #[tabled(rename = "Seller")]
    seller: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Orders")]
    orders: u64,
}

#[derive(Tabled)]
struct RatingRow {
    #[tabled(rename = "Seller")]
    seller: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Orders")]
    orders: u64,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

#[derive(Tabled)]
struct RfmDisplayRow {
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Recency (days)")]
    recency: i64,
    #[tabled(rename = "Frequency")]
    frequency: u64,
    #[tabled(rename = "Monetary")]
    monetary: String,
}

struct Analysis {
    report: AnalyticsReport,
    top_k: usize,
}

fn run(config: &Config, args: &AnalysisArgs) -> Result<Analysis> {
    let data_path = args.data.as_deref().unwrap_or(&config.data.path);
    let records = store::load_records(data_path)?;

    // A bare invocation reports over the dataset's whole span.
    let range = match DateRange::full_span(&records) {
        Some(span) => DateRange::new(
            args.from.unwrap_or(span.start()),
            args.to.unwrap_or(span.end()),
        ),
        None => {
            let today = chrono::Utc::now().date_naive();
            DateRange::new(args.from.unwrap_or(today), args.to.unwrap_or(today))
        }
    };

    if let Err(e) = range.validate(&records) {
        output::warn(&format!("{e}; the report will be empty"));
    }

    Ok(Analysis {
        report: analyze(&records, range),
        top_k: args.top_k.unwrap_or(config.report.top_k),
    })
}

/// Execute `report`: headline metrics plus every derived view.
pub fn execute_report(config: &Config, args: &AnalysisArgs) -> Result<()> {
    let analysis = run(config, args)?;
    print_headline(&analysis.report);
    print_daily(&analysis.report);
    print_sellers(&analysis.report, analysis.top_k);
    print_ratings(&analysis.report, analysis.top_k);
    print_rfm(&analysis.report, analysis.top_k);
    Ok(())
}

/// Execute `daily`.
pub fn execute_daily(config: &Config, args: &AnalysisArgs) -> Result<()> {
    let analysis = run(config, args)?;
    print_headline(&analysis.report);
    print_daily(&analysis.report);
    Ok(())
}

/// Execute `sellers`.
pub fn execute_sellers(config: &Config, args: &AnalysisArgs) -> Result<()> {
    let analysis = run(config, args)?;
    print_sellers(&analysis.report, analysis.top_k);
    Ok(())
}

/// Execute `ratings`.
pub fn execute_ratings(config: &Config, args: &AnalysisArgs) -> Result<()> {
    let analysis = run(config, args)?;
    print_ratings(&analysis.report, analysis.top_k);
    Ok(())
}

/// Execute `rfm`.
pub fn execute_rfm(config: &Config, args: &AnalysisArgs) -> Result<()> {
    let analysis = run(config, args)?;
    print_rfm(&analysis.report, analysis.top_k);
    Ok(())
}

fn print_headline(report: &AnalyticsReport) {
    output::section("Orders");
    output::key_value("Total orders", report.daily.total_orders());
    output::key_value("Total revenue", report.daily.total_revenue());
}

fn print_daily(report: &AnalyticsReport) {
    output::section("Daily orders");
    if report.daily.is_empty() {
        output::note("  no orders in the selected window");
        return;
    }
    let rows: Vec<DailyRow> = report
        .daily
        .buckets
        .iter()
        .map(|b| DailyRow {
            date: b.date.to_string(),
            orders: b.order_count,
            revenue: b.revenue.to_string(),
        })
        .collect();
    output::table_block(&Table::new(rows).to_string());
}

fn print_sellers(report: &AnalyticsReport, top_k: usize) {
    let table = &report.seller_performance;

    output::section("Best performing sellers");
    if table.is_empty() {
        output::note("  no sellers in the selected window");
        return;
    }
    let best: Vec<SellerRow> = table.top(top_k).iter().map(seller_row).collect();
    output::table_block(&Table::new(best).to_string());

    output::section("Worst performing sellers");
    let worst: Vec<SellerRow> = table.bottom(top_k).into_iter().map(seller_row).collect();
    output::table_block(&Table::new(worst).to_string());
}

fn print_ratings(report: &AnalyticsReport, top_k: usize) {
    let table = &report.seller_ratings;

    output::section("Best rated sellers");
    if table.is_empty() {
        output::note("  no reviewed orders in the selected window");
        return;
    }
    let best: Vec<RatingRow> = table.top(top_k).iter().map(rating_row).collect();
    output::table_block(&Table::new(best).to_string());

    output::section("Worst rated sellers");
    let worst: Vec<RatingRow> = table.bottom(top_k).into_iter().map(rating_row).collect();
    output::table_block(&Table::new(worst).to_string());
}

fn print_rfm(report: &AnalyticsReport, top_k: usize) {
    let table = &report.customer_rfm;

    output::section("Best customers (RFM)");
    if table.is_empty() {
        output::note("  no customers in the selected window");
        return;
    }

    if let Some(recency) = table.mean_recency() {
        output::key_value("Average recency (days)", format!("{recency:.1}"));
    }
    if let Some(frequency) = table.mean_frequency() {
        output::key_value("Average frequency", format!("{frequency:.2}"));
    }
    if let Some(monetary) = table.mean_monetary() {
        output::key_value("Average monetary", monetary);
    }

    output::section("By recency");
    let rows: Vec<RfmDisplayRow> = table.top_by_recency(top_k).iter().map(rfm_row).collect();
    output::table_block(&Table::new(rows).to_string());

    output::section("By frequency");
    let rows: Vec<RfmDisplayRow> = table
        .top_by_frequency(top_k)
        .into_iter()
        .map(rfm_row)
        .collect();
    output::table_block(&Table::new(rows).to_string());

    output::section("By monetary");
    let rows: Vec<RfmDisplayRow> = table
        .top_by_monetary(top_k)
        .into_iter()
        .map(rfm_row)
        .collect();
    output::table_block(&Table::new(rows).to_string());
}

fn seller_row(row: &SellerPerformanceRow) -> SellerRow {
    SellerRow {
        seller: row.seller_id.to_string(),
        revenue: row.revenue.to_string(),
        orders: row.order_count,
    }
}

fn rating_row(row: &SellerRatingRow) -> RatingRow {
    RatingRow {
        seller: row.seller_id.to_string(),
        rating: format!("{:.2}", row.rating),
        orders: row.order_count,
        revenue: row.revenue.to_string(),
    }
}

fn rfm_row(row: &RfmRow) -> RfmDisplayRow {
    RfmDisplayRow {
        customer: row.customer_id.to_string(),
        recency: row.recency,
        frequency: row.frequency,
        monetary: row.monetary.to_string(),
    }
}
