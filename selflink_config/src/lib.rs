mod schema;

pub use schema::{Config, FunctionsConfig, LoggingConfig};
