//! Fetch and print real-estate listings for a filter.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use browse::{FetchStatus, ListingBrowser, ListingFilter, ListingType};
use realestate_client::RealEstateClient;

mod config;
use config::Config;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Rent,
    Buy,
}

impl From<FilterArg> for ListingFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ListingFilter::All,
            FilterArg::Rent => ListingFilter::Rent,
            FilterArg::Buy => ListingFilter::Buy,
        }
    }
}

#[derive(Parser)]
#[command(about = "Browse real-estate listings")]
struct Cli {
    /// Listing filter to apply
    #[arg(value_enum, default_value = "all")]
    filter: FilterArg,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::info!(base_url = %config.base_url, "Starting listing browser");

    let client = RealEstateClient::new(config.base_url);
    let browser = ListingBrowser::new(Arc::new(client));
    let filter = ListingFilter::from(cli.filter);
    if filter != ListingFilter::All {
        browser.update_filter(filter);
    }

    let mut status = browser.status();
    let resolved = *status.wait_for(|s| *s != FetchStatus::Loading).await?;
    if resolved == FetchStatus::Error {
        anyhow::bail!("failed to fetch listings (set RUST_LOG=debug for detail)");
    }

    let listings = browser.listings().borrow().clone();
    println!("{} listing(s) for filter '{:?}':", listings.len(), filter);
    for listing in &listings {
        let price = match (listing.listing_type, listing.price) {
            (ListingType::Rent, Some(p)) => format!("${p}/month"),
            (_, Some(p)) => format!("${p}"),
            (_, None) => "price on request".to_string(),
        };
        println!("  {:<10} {:<8} {}", listing.id, format!("{:?}", listing.listing_type).to_lowercase(), price);
    }

    Ok(())
}
