//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::HotPotatoError;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, or by `directives`
/// when `RUST_LOG` is unset.
///
/// # Errors
/// [`HotPotatoError::Config`] if the directives don't parse or a global
/// subscriber is already installed.
pub fn init_tracing(directives: &str) -> Result<(), HotPotatoError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives).map_err(|e| {
            HotPotatoError::Config(format!("invalid log filter {directives:?}: {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| HotPotatoError::Config(format!("tracing already initialised: {e}")))
}
