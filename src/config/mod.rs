pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod expand;
pub mod validate;

pub use configs::{DatabaseConfig, GenerateConfig, GeneratorConfig, LoggingConfig};
pub use envconfig::EnvConfig;
