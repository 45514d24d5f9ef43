//! theme_money - storefront money formatter
//!
//! Renders minor-unit amounts with the shop's money template.
//!
//! Run with: cargo run -- --format "{{amount_with_comma_separator}} €" 150000

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use theme_money::cli::Invocation;
use theme_money::{Config, MoneyFormatter};

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "theme_money=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json_logging() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    let invocation = match Invocation::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: theme_money [--format <template>] [--currency] <amount>...");
            std::process::exit(e.exit_code());
        }
    };

    let formatter = MoneyFormatter::from_config(&config);
    tracing::debug!(template = %formatter.default_template(), "Formatter ready");

    match invocation.run(&formatter) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Formatting failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
