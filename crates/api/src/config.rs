//! Service configuration read from the environment.

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_TEMPLATE_PATH: &str = "assets/templates/plantilla_jumpers.xlsx";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Jumpers template workbook. Relative paths resolve against the working directory.
    pub template_path: PathBuf,
    /// Directory the debug endpoint writes the last generated file into.
    pub debug_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            debug_dir: std::env::temp_dir(),
        }
    }
}

impl AppConfig {
    /// Read `HOST`, `PORT`, `TEMPLATE_PATH` and `DEBUG_DIR`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: port.clone(), source })?;
        }
        if let Some(path) = lookup("TEMPLATE_PATH") {
            config.template_path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("DEBUG_DIR") {
            config.debug_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
