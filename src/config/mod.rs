//! Configuration management for the pigeonhole generator

pub mod settings;

pub use settings::{CliOverrides, LogLevel, LoggingConfig, OutputConfig, Settings};
