use clap::Parser;
use tracing::error;

use orderlens::cli::{report, Cli, Commands};
use orderlens::config::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.command.args().config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    config.init_logging();

    let result = match &cli.command {
        Commands::Report(args) => report::execute_report(&config, args),
        Commands::Daily(args) => report::execute_daily(&config, args),
        Commands::Sellers(args) => report::execute_sellers(&config, args),
        Commands::Ratings(args) => report::execute_ratings(&config, args),
        Commands::Rfm(args) => report::execute_rfm(&config, args),
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}
