use std::time::Duration;

use inventory_core::inventory::{stock_value, to_money, StockItem};
use inventory_db::models::product::ProductListing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_client::config::ClientConfig;
use inventory_client::{Dashboard, InventoryApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_base = %config.api_base, "Loaded client configuration");

    let api = InventoryApi::new(
        config.api_base.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;
    let health = api.health().await?;
    tracing::info!(message = %health.message, "API reachable");

    let mut dashboard = Dashboard::new(api);
    dashboard.load().await;

    render(&dashboard);
    Ok(())
}

fn render(dashboard: &Dashboard<InventoryApi>) {
    let summary = dashboard.summary();

    println!("Inventory Dashboard");
    println!();

    if summary.has_low_stock() {
        println!(
            "!! {} product(s) at or below minimum stock level",
            summary.low_stock_count
        );
        for product in dashboard.low_stock() {
            println!(
                "   - {} ({}): {} left, minimum {}",
                product.product.name,
                product.product.sku,
                product.product.stock_quantity,
                product.product.min_stock_level
            );
        }
        println!();
    }

    println!("Total products:  {}", summary.total_products);
    println!("Low stock items: {}", summary.low_stock_count);
    println!("Total value:     ${}", summary.total_value);
    println!();

    if dashboard.products().is_empty() {
        println!("No products yet.");
        return;
    }

    for product in dashboard.products() {
        print_card(product);
    }
}

fn print_card(listing: &ProductListing) {
    let product = &listing.product;
    let badge = if listing.is_low_stock() { " [LOW STOCK]" } else { "" };

    println!("#{} {}{}", product.id, product.name, badge);
    println!("  SKU:      {}", product.sku);
    println!(
        "  Category: {}",
        listing.category_name.as_deref().unwrap_or("Uncategorized")
    );
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  {description}");
    }
    println!("  Price:    ${}  Cost: ${}", product.price, product.cost);
    let value = stock_value(product.price, product.stock_quantity)
        .map(|v| to_money(v).to_string())
        .unwrap_or_else(|| "overflow".to_string());
    println!(
        "  Stock:    {} (min {})  Value: ${}",
        product.stock_quantity, product.min_stock_level, value
    );
    println!();
}
