//! Shared configuration for the futures client crates.

mod environment;
pub mod logging;

pub use environment::{FuturesEnvironment, ParseEnvironmentError, ENVIRONMENT_ENV};
pub use logging::{init_logging, LogConfig, LoggingError};
