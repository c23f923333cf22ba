//! Logging setup for the relay
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer in either text or JSON form.

use relay_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const FALLBACK_FILTER: &str = "info";

/// Initialize the global subscriber
///
/// `filter_override` (usually `RUST_LOG`) wins over the configured filter. An
/// unparseable filter falls back to `info` rather than failing startup.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LoggingConfig, filter_override: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(filter_override.unwrap_or(&config.filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json().flatten_event(true)).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directives}' ({e}), falling back to '{FALLBACK_FILTER}'");
        EnvFilter::new(FALLBACK_FILTER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_filter_is_kept() {
        let filter = build_filter("tts=debug,info");
        assert_eq!(filter.to_string(), EnvFilter::new("tts=debug,info").to_string());
    }

    #[test]
    fn invalid_filter_falls_back_to_info() {
        let filter = build_filter("tts=notalevel");
        assert_eq!(filter.to_string(), EnvFilter::new(FALLBACK_FILTER).to_string());
    }
}
