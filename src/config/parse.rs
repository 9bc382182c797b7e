use super::types::Config;
use std::fs::File;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    use std::io::Read;

    let mut file = File::open(path).map_err(|e| {
        ConfigError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to open config file '{}': {}", path.display(), e),
        ))
    })?;

    let mut yaml_string = String::new();
    file.read_to_string(&mut yaml_string).map_err(|e| {
        ConfigError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read config file '{}': {}", path.display(), e),
        ))
    })?;

    let config: Config = serde_yaml::from_str(&yaml_string)?;

    validate_config(&config)?;

    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.web.listen.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::Validation(format!(
            "web.listen '{}' is not a valid socket address",
            config.web.listen
        )));
    }

    if config.sources.random_min > config.sources.random_max {
        return Err(ConfigError::Validation(format!(
            "sources.random_min ({}) must not exceed sources.random_max ({})",
            config.sources.random_min, config.sources.random_max
        )));
    }

    Ok(())
}
