//! Logging initialisation.
//!
//! Logs always go to stderr: stdout belongs to the MCP session.

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::Directive, fmt};

use super::config::LoggingConfig;

/// Target of the start-up announcement. Enabled at `info` whatever the
/// configured level.
pub const STARTUP_TARGET: &str = "mcp_toolkit::startup";

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format. Directives
/// from `RUST_LOG` are combined with the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let builder = fmt()
        .with_env_filter(build_filter(&config.level))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if config.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}

/// Build the filter for `level`, keeping [`STARTUP_TARGET`] at `info`.
fn build_filter(level: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());

    match format!("{STARTUP_TARGET}=info").parse::<Directive>() {
        Ok(startup) => filter.add_directive(startup),
        Err(_) => filter,
    }
}

/// Map a level name to a tracing level, falling back to `INFO`.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
