//! Server logging
//!
//! Two streams: the access stream carries the startup line and the
//! per-request entries, the error stream carries warnings and
//! failures. See [`writer`] for where each stream is written.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use hyper::Version;
use std::net::SocketAddr;

/// Open the configured log files. Must run before the first request.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

// Before init (and in unit tests) lines fall back to the console
fn emit_access(line: &str) {
    match writer::get() {
        Some(w) => w.write_access(line),
        None => println!("{line}"),
    }
}

fn emit_error(line: &str) {
    match writer::get() {
        Some(w) => w.write_error(line),
        None => eprintln!("{line}"),
    }
}

/// The single startup line
pub fn log_server_start(addr: &SocketAddr) {
    emit_access(&format!("DIEX Server Running on: http://{addr}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    emit_access(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    emit_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    emit_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    emit_error(&format!("[WARN] {message}"));
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    emit_access(&entry.format(format));
}

/// HTTP version as it appears in a request line (`1.1`, `2`)
pub fn format_version(version: Version) -> String {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
    .to_string()
}
