use coffee_orders::lifecycle::{setup_tracing, Backend, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env()?;
    info!("Starting coffee orders backend");

    Backend::new(config).serve().await?;

    info!("Application completed successfully");
    Ok(())
}
