use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pricescout_common::Config;
use pricescout_scout::report;
use pricescout_scout::scout::Scout;

/// Find the best advertised prices for a product and pull structured
/// specifications for the cheapest offers.
#[derive(Parser)]
#[command(name = "pricescout")]
struct Args {
    /// Product to search for, e.g. "galaxy s24 256gb"
    product_name: String,

    /// Max items to enrich with specifications
    #[arg(long, default_value_t = 10)]
    top_n: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pricescout_scout=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("Price Scout starting...");

    // Load config
    let config = Config::from_env();
    config.log_redacted();

    let scout = Scout::new(&config);
    let report_data = scout.run(&args.product_name, args.top_n).await?;

    report::render(&report_data, &mut std::io::stdout())?;

    Ok(())
}
