//! Command-line and environment configuration.
//!
//! Every flag has an environment fallback so the server can be configured
//! either way; flags win over the environment.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use parks_storage::SqliteStore;

use crate::error::ApiError;
use crate::render::Templates;
use crate::state::AppState;

/// Parks of Prague web server.
#[derive(Debug, Clone, Parser)]
#[command(name = "parks", about = "Parks of Prague web server")]
pub struct ServerArgs {
    /// Interface to bind.
    #[arg(long, env = "PARKS_HOSTNAME", default_value = "127.0.0.1")]
    pub hostname: String,

    /// Port to listen on.
    #[arg(short, long, env = "PARKS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Maximum log level: trace, debug, info, warn, error.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: Level,

    /// SQLite database file.
    #[arg(long, env = "PARKS_DB_PATH", default_value = "parks.db")]
    pub db_path: String,

    /// Keep parks in an in-memory database instead of `db_path`.
    #[arg(long)]
    pub in_memory: bool,

    /// Directory of `*.html` templates overriding the bundled ones.
    #[arg(long, env = "PARKS_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl ServerArgs {
    /// `hostname:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }

    /// Loads templates and opens the store described by these arguments.
    pub fn build_state(&self) -> Result<AppState, ApiError> {
        let templates = match &self.templates_dir {
            Some(dir) => Templates::from_dir(dir)?,
            None => Templates::embedded()?,
        };
        templates.ensure_pages()?;

        let (store, location) = if self.in_memory {
            (SqliteStore::in_memory()?, ":memory:")
        } else {
            (SqliteStore::new(&self.db_path)?, self.db_path.as_str())
        };
        tracing::info!(db = location, "opened park store");

        Ok(AppState::new(store, templates))
    }
}
