use std::env;

use dotenv::dotenv;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::errors::AppError;

pub const LOG_LEVEL_KEY: &str = "ROLODEX_LOG";

/// Pulls `.env` into the process environment. A missing file is fine.
pub fn load_env() {
    dotenv().ok();
}

pub fn get_env_value_by_key(key: &str) -> Result<String, AppError> {
    env::var(key).map_err(|_| AppError::NotFound(format!("{} in env", key)))
}

/// Log level from `ROLODEX_LOG`, falling back to WARN when unset or unreadable.
pub fn log_level() -> Level {
    get_env_value_by_key(LOG_LEVEL_KEY)
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN)
}

/// Logs go to stderr so command output on stdout stays clean.
pub fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level())
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}
