//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, LogFormat},
    error::{Error, Result},
};

/// Install the global tracing subscriber
///
/// Falls back to `info` when `service.log_level` is not a valid filter directive.
///
/// # Errors
///
/// Returns [`Error::Tracing`] if a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = &config.service.log_level;
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.service.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|e| Error::Tracing(e.to_string()))?;

    tracing::info!(
        "Tracing initialized for service: {} ({} output)",
        config.service.name,
        config.service.log_format
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let mut config = Config::default();
        config.service.log_level = "not a [valid directive".to_string();

        // The first call may succeed or not depending on test ordering,
        // but after it a global subscriber is always in place.
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(Error::Tracing(_))));
    }
}
