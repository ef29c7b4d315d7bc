use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;

/// Parses a config from an optional file and `POLLS_` prefixed environment
/// variables. Environment variables take precedence over the file, and a
/// missing file is not an error.
pub fn parse<T: DeserializeOwned>(config_file: &str) -> Result<T, ConfigError> {
    let mut builder = Config::builder();

    if !config_file.is_empty() {
        builder = builder.add_source(File::with_name(config_file).required(false));
    }

    builder
        .add_source(Environment::with_prefix("POLLS"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests;
