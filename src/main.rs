use std::time::Duration;

use dotenvy::dotenv;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{error, info, warn};

mod config;
mod croma;
mod error;
mod products;

use config::Config;
use croma::Availability;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::load();
    info!(
        "Watching pincode {} every {}s (products: {})",
        config.zip_code, config.poll_interval_secs, config.products_file
    );

    let client = Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .unwrap();

    loop {
        run_sweep(&config, &client).await;
        sleep(Duration::from_secs(config.poll_interval_secs)).await;
    }
}

/// One pass over the product list. The list is re-read every sweep so
/// edits take effect without a restart; a read failure skips the sweep
/// and the loop keeps ticking.
async fn run_sweep(config: &Config, client: &Client) {
    let products = match products::load(&config.products_file) {
        Ok(p) => p,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let mut checked = 0usize;
    let mut skipped = 0usize;
    for product in &products {
        if !product.enabled {
            skipped += 1;
            continue;
        }
        checked += 1;

        let status =
            croma::check_availability(client, &config.api_url, &product.id, &config.zip_code)
                .await;
        match status {
            Availability::InStock => info!(
                "In stock: {} (ID: {}) for pincode {}",
                product.name, product.id, config.zip_code
            ),
            Availability::OutOfStock => info!(
                "Out of stock: {} (ID: {}) for pincode {}",
                product.name, product.id, config.zip_code
            ),
            Availability::Unknown => warn!(
                "Status unknown: {} (ID: {}) for pincode {}",
                product.name, product.id, config.zip_code
            ),
        }
    }

    info!("Sweep complete: {} checked, {} skipped", checked, skipped);
}
