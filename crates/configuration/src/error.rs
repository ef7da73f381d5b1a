use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "config file {0} was not found; a blank template has been written there. \
         Fill in the connection details and restart."
    )]
    Missing(PathBuf),

    #[error("Failed to load configuration from file: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Failed to write the config template: {0}")]
    TemplateWrite(#[from] std::io::Error),
}
