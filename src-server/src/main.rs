//! `task-manager` binary entrypoint.
//!
//! Loads configuration from environment variables and starts the HTTP server.

use task_manager_lib::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    rolling_logger::init_logger(&config.log_dir, "TaskManager")?;

    if let Err(e) = task_manager_lib::run(config).await {
        rolling_logger::error(&format!("Server stopped: {:#}", e));
        return Err(e);
    }
    Ok(())
}
