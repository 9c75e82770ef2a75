//! Logger module
//!
//! Timestamped stdout/stderr logging helpers for the HTTP server.

use chrono::Local;
use std::net::SocketAddr;

use crate::config::Config;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started successfully");
    println!("Listening on: http://{addr}");
    println!(
        "Configured host: {}  port: {}",
        config.server.host, config.server.port
    );
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_request(method: &hyper::Method, uri: &hyper::Uri) {
    println!("[{}] {method} {uri}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[{}] [ERROR] Failed to serve connection: {err:?}", timestamp());
}

pub fn log_error(message: &str) {
    eprintln!("[{}] [ERROR] {message}", timestamp());
}

pub fn log_warning(message: &str) {
    eprintln!("[{}] [WARN] {message}", timestamp());
}
