use crate::primitives::*;
use std::io;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Logger implementation using tracing
#[derive(Debug)]
pub struct Logger {
    _guard: (),
}

impl Logger {
    /// Initialize the global logger with color-aware configuration
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        // Check if already initialized
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // Configure environment filter for log levels with modplan-focused filtering
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level_str = match config.level {
                LogLevel::Error => "error",
                LogLevel::Warning => "warn",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            };

            // Filter: modplan at level, external crates at warn
            EnvFilter::new(format!("modplan={},warn", level_str))
        });

        let ansi = config.color.enables_ansi(config.output);

        // Configure formatting with output selection
        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Pretty) => fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Pretty) => fmt::layer()
                .with_writer(io::stdout)
                .with_ansi(ansi)
                .pretty()
                .boxed(),
        };

        // Initialize tracing subscriber with layered configuration
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let logger = Logger { _guard: () };

        GLOBAL_LOGGER
            .set(logger)
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            color = ?config.color,
            "Logger initialized"
        );

        Ok(GLOBAL_LOGGER.get().unwrap())
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
