use std::io::Write;

use env_logger::Env;
use log::LevelFilter;

pub const DEFAULT_LOGGER_NAME: &str = "YGK";

/// Logging setup shared by the key source and the command line driver.
///
/// Built once at startup and passed around by reference. Records are emitted with
/// `target: config.target()` so every line carries the logger name.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub name: String,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME, false)
    }
}

impl LogConfig {
    pub fn new(name: impl Into<String>, verbose: bool) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self {
            name: name.into(),
            level,
        }
    }

    pub fn target(&self) -> &str {
        &self.name
    }

    /// Install the global logger. `RUST_LOG` overrides the configured level.
    /// Panics if a logger is already installed.
    pub fn init(&self) {
        self.builder().init();
    }

    fn builder(&self) -> env_logger::Builder {
        let mut builder =
            env_logger::Builder::from_env(Env::default().default_filter_or(self.level.as_str()));
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                record.target(),
                buf.timestamp_millis(),
                record.args()
            )
        });
        builder
    }
}
