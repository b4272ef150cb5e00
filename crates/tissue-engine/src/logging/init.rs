use std::sync::Once;

use log::LevelFilter;

/// Logger setup.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`
/// with every module in `quiet_modules` held at `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax, e.g. `"tissue_box=trace,wgpu_core=warn"`.
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub quiet_modules: Vec<&'static str>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            quiet_modules: vec!["wgpu_core", "wgpu_hal", "naga"],
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq)]
enum FilterSource {
    Explicit(String),
    Defaults {
        level: LevelFilter,
        quiet: Vec<&'static str>,
    },
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    match config.env_filter.clone().or(rust_log) {
        Some(filter) => FilterSource::Explicit(filter),
        None => FilterSource::Defaults {
            level: config.default_level,
            quiet: config.quiet_modules.clone(),
        },
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Later calls are no-ops.
///
/// Call first thing in `main` so adapter and surface selection are logged.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Explicit(filter) => {
                builder.parse_filters(&filter);
            }
            FilterSource::Defaults { level, quiet } => {
                builder.filter_level(level);
                for module in quiet {
                    builder.filter_module(module, LevelFilter::Warn);
                }
            }
        }

        builder.write_style(config.write_style).init();
        log::debug!("logging initialized");
    });
}
