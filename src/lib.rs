pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod github;
pub mod logger;
pub mod output;
pub mod utils;

pub use error::{GatewayError, GogiError, ReportError, Result};
