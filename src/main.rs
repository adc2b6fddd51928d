use anyhow::Result;

use gardenist::config::Config;
use gardenist::garden::GardenService;
use gardenist::storage::LocalStorage;
use gardenist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Write a starter config file and exit
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;
    log::info!("Starting gardenist");

    let storage = LocalStorage::new(false).await?;
    let service = GardenService::new(storage);

    // Run the TUI application
    ui::run_app(service, config).await?;

    Ok(())
}
