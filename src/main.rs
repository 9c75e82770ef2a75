use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod template;

use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cfg = config::Config::load();
    let addr = cfg.socket_addr()?;

    // Startup failures (e.g. port in use) are fatal
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            logger::log_error(&format!("Failed to bind {addr}: {e}"));
            return Err(AppError::Bind(e));
        }
    };

    logger::log_server_start(&addr, &cfg);

    let config = Arc::new(cfg);
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => handle_connection(stream, Arc::clone(&config)),
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}

/// Serve a single connection on a spawned task.
fn handle_connection(stream: tokio::net::TcpStream, config: Arc<config::Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| handler::handle_request(req, Arc::clone(&config))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
