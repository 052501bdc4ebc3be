use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `logging.level`. Output goes to stderr so stdout stays
/// reserved for command output such as `--print-config`. A second call is a
/// no-op.
pub fn init(config: &LoggingConfig) {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Logging already initialized");
    }
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|e| {
            eprintln!(
                "invalid log level '{}' ({e}), falling back to 'info'",
                config.level
            );
            EnvFilter::new("info")
        })
}
