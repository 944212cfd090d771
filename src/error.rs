//! Startup error types
//!
//! Everything here is fatal: the process reports it and exits non-zero before
//! any request is served. Per-request failures never reach this type.

use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        source: AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Failed to open log files: {0}")]
    Logger(#[source] std::io::Error),

    #[error("Failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
