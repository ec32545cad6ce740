//! Setup logging subsystem.
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config;
use crate::error::LoggerError;

/// Crates of this workspace that log at the configured level rather than the default one.
const WORKSPACE_CRATES: [&str; 5] = [
    "apm_common_enums",
    "apm_common_utils",
    "domain_types",
    "connector_integration",
    "rust_apm_client",
];

/// Contains guards necessary for logging
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Setup logging sub-system specifying the logging configuration, service name, and a list of
/// external crates for which a more verbose logging must be enabled. All crates within this
/// workspace are always logged at the configured level.
///
/// Console output goes to stderr through a non-blocking writer, so the returned guard has to be
/// kept alive for buffered events to be flushed.
pub fn setup(
    config: &config::Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> Result<TelemetryGuard, LoggerError> {
    let mut guards = Vec::new();

    let console_layer: Option<Box<dyn Layer<Registry> + Send + Sync>> = if config.console.enabled
    {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        guards.push(guard);

        let level = config.console.level.into_level();
        let console_filter_directive = config
            .console
            .filtering_directive
            .clone()
            .unwrap_or_else(|| {
                get_envfilter_directive(tracing::Level::WARN, level, crates_to_filter.as_ref())
            });
        let console_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .parse(console_filter_directive)?;

        let layer = match config.console.log_format {
            config::LogFormat::Default => fmt::layer()
                .with_writer(console_writer)
                .with_filter(console_filter)
                .boxed(),
            config::LogFormat::Json => {
                // Disable color or emphasis related ANSI escape codes for JSON formats
                error_stack::Report::set_color_mode(error_stack::fmt::ColorMode::None);

                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(console_writer)
                    .with_filter(console_filter)
                    .boxed()
            }
        };
        Some(layer)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    tracing::info!(
        service_name,
        console_enabled = config.console.enabled,
        "Logging subsystem initialized"
    );

    Ok(TelemetryGuard {
        _log_guards: guards,
    })
}

fn get_envfilter_directive(
    default_log_level: tracing::Level,
    filter_log_level: tracing::Level,
    crates_to_filter: &[&'static str],
) -> String {
    WORKSPACE_CRATES
        .iter()
        .chain(crates_to_filter)
        .map(|crate_name| format!("{}={filter_log_level}", crate_name.replace('-', "_")))
        .fold(vec![default_log_level.to_string()], |mut directives, directive| {
            directives.push(directive);
            directives
        })
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_covers_workspace_and_requested_crates() {
        let directive = get_envfilter_directive(
            tracing::Level::WARN,
            tracing::Level::DEBUG,
            &["quick-xml"],
        );

        assert!(directive.starts_with("WARN,"));
        assert!(directive.contains("connector_integration=DEBUG"));
        assert!(directive.contains("rust_apm_client=DEBUG"));
        assert!(directive.ends_with("quick_xml=DEBUG"));
    }

    #[test]
    fn generated_directive_is_accepted_by_env_filter() {
        let directive =
            get_envfilter_directive(tracing::Level::WARN, tracing::Level::TRACE, &["config"]);

        assert!(EnvFilter::builder().parse(directive).is_ok());
    }
}
