//! Command-line interface definitions.

pub mod output;
pub mod report;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Orderlens - order analytics over an e-commerce record store.
#[derive(Parser, Debug)]
#[command(name = "orderlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Headline metrics and every derived view
    Report(AnalysisArgs),

    /// Daily order-count/revenue series
    Daily(AnalysisArgs),

    /// Seller revenue ranking, best and worst
    Sellers(AnalysisArgs),

    /// Seller rating ranking, best and worst
    Ratings(AnalysisArgs),

    /// Customer RFM segmentation
    Rfm(AnalysisArgs),
}

impl Commands {
    /// The analysis arguments shared by every subcommand.
    #[must_use]
    pub fn args(&self) -> &AnalysisArgs {
        match self {
            Self::Report(args)
            | Self::Daily(args)
            | Self::Sellers(args)
            | Self::Ratings(args)
            | Self::Rfm(args) => args,
        }
    }
}

/// Shared arguments for the analysis subcommands.
#[derive(Parser, Debug)]
pub struct AnalysisArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "orderlens.toml")]
    pub config: PathBuf,

    /// Override the record store CSV path
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Start of the analysis window (YYYY-MM-DD, default: dataset start)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End of the analysis window (YYYY-MM-DD, default: dataset end)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Rows shown in ranked views (overrides config)
    #[arg(long)]
    pub top_k: Option<usize>,
}
