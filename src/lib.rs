pub mod cli;
pub mod commands;
pub mod config;
pub mod converters;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod output;
pub mod server;
pub mod service;

pub use error::{K6GenError, Result};
