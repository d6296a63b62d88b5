//! Headless wiring of the directory core: config, logger, local store,
//! remote sync, and a stdout rendering of the grouped directory. The real
//! presentation layer lives elsewhere; this binary stands in for it.

mod error;
mod logger;

use roster_core::{get_initials, group_users_by_initial};
use roster_db::UserRepository;
use roster_sync::{RefreshSource, RemoteClient, SyncCoordinator};

use std::error::Error;
use std::sync::Arc;

use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = roster_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = roster_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    logger::initialize(config.logging.level, log_file_path, true)?;

    // Local store: the system of record for everything rendered below
    let pool = roster_db::open_pool(&config.database.path).await?;
    let store = Arc::new(UserRepository::new(pool));
    store.init().await?;
    info!("local store ready at {}", config.database.path);

    // One refresh at activation; further refreshes are caller-driven
    let remote = RemoteClient::new(&config.remote.url);
    let coordinator = SyncCoordinator::new(store.clone(), remote);
    let outcome = coordinator.refresh().await?;

    match &outcome.source {
        RefreshSource::Remote => info!("directory view is fresh from remote"),
        RefreshSource::CacheFallback { cause } => {
            warn!("directory view is the local cache: {cause}")
        }
    }

    for (initial, users) in group_users_by_initial(&outcome.users) {
        println!("{initial}");
        for user in users {
            println!(
                "  [{}] {} <{}> ({})",
                get_initials(&user.name),
                user.name,
                user.email,
                user.role
            );
        }
    }

    Ok(())
}
