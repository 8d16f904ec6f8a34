mod config;
mod error;

pub use config::{Config, Network};
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;
