//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::LabConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { name: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { name, value } => {
                write!(f, "Environment error: {} must be a port number, got '{}'", name, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse configuration from a TOML file. Validation happens after overrides.
pub fn load_config(path: &Path) -> Result<LabConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Apply `PORT`, `BOAT_SERVICE_PORT` and `BRAND_SERVICE_PORT` overrides.
pub fn apply_env(config: &mut LabConfig) -> Result<(), ConfigError> {
    apply_env_with(config, |name| std::env::var(name).ok())
}

/// Same as [`apply_env`], reading variables through `lookup`.
pub fn apply_env_with<F>(config: &mut LabConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = port_var(&lookup, "PORT")? {
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }
    if let Some(port) = port_var(&lookup, "BOAT_SERVICE_PORT")? {
        config.upstreams.boat_url = format!("http://localhost:{}", port);
    }
    if let Some(port) = port_var(&lookup, "BRAND_SERVICE_PORT")? {
        config.upstreams.brand_url = format!("http://localhost:{}", port);
    }
    Ok(())
}

fn port_var<F>(lookup: &F, name: &'static str) -> Result<Option<u16>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { name, value }),
    }
}

/// Run semantic validation, wrapping failures in [`ConfigError`].
pub fn validate(config: &LabConfig) -> Result<(), ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)
}
