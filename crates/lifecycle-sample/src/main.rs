use std::path::Path;

use lifecycle_framework::tracing::setup_tracing;
use lifecycle_sample::{Settings, System};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)).map_err(|e| e.to_string())?,
        None => Settings::default(),
    };

    let system = System::build(settings);

    if let Err(err) = system.graph.start(&system.shutdown).await {
        // Fail-fast startup leaves earlier components running; bring them
        // back down before exiting.
        error!(error = %err, "startup failed, stopping components that came up");
        let _ = system.graph.stop(&system.shutdown).await;
        return Err(err.to_string());
    }

    info!(addr = ?system.server.local_addr(), "system up, ctrl-c to exit");
    tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;
    info!("shutdown signal received");

    system.shutdown.cancel();
    system.graph.stop(&system.shutdown).await.map_err(|e| e.to_string())?;

    info!("system stopped");
    Ok(())
}
