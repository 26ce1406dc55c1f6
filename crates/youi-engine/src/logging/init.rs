use std::sync::Once;

use env_logger::WriteStyle;

const DEFAULT_FILTER: &str = "info";

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g.
/// `"youi_ui=debug,youi_engine=warn"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
    /// Prefix each line with the emitting module path.
    pub show_target: bool,
    /// Route output through the test harness capture.
    pub is_test: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
            show_target: true,
            is_test: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose, captured output for unit and integration tests.
    pub fn for_tests() -> Self {
        Self {
            env_filter: Some("trace".to_string()),
            is_test: true,
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn with_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Effective filter: the configured one, else `RUST_LOG`, else `info`.
    fn resolve_filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has an effect.
///
/// A logger installed by someone else (an embedding host, another test) is
/// left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());
        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_target(config.show_target)
            .is_test(config.is_test);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized with filter {filter:?}"),
            Err(err) => log::debug!("logging already initialized: {err}"),
        }
    });
}
