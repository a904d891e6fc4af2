use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::CycleError;

/// How to reach the status endpoint, plus the cycle's wait budgets.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub connect_attempts: u32,
    pub connect_retry_delay: Duration,
    pub first_byte_deadline: Duration,
}

/// The fixed-shape request. `Connection: close` makes the peer close the
/// stream after the body, which is what ends extraction.
fn request_bytes(host: &str, path: &str) -> String {
    format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n")
}

/// Open a fresh connection, send the status request and wait for the first
/// response byte. The connection is never reused across cycles.
///
/// The returned stream still contains every response byte; `peek` leaves
/// the first one unread for the extractor.
pub async fn fetch(cfg: &FetchConfig) -> Result<TcpStream, CycleError> {
    let mut stream = connect(cfg).await?;

    stream
        .write_all(request_bytes(&cfg.host, &cfg.path).as_bytes())
        .await?;

    let mut first = [0u8; 1];
    match timeout(cfg.first_byte_deadline, stream.peek(&mut first)).await {
        Ok(Ok(_)) => Ok(stream),
        Ok(Err(e)) => Err(CycleError::Io(e)),
        Err(_) => Err(CycleError::ResponseTimeout {
            waited_ms: cfg.first_byte_deadline.as_millis() as u64,
        }),
    }
}

async fn connect(cfg: &FetchConfig) -> Result<TcpStream, CycleError> {
    for attempt in 1..=cfg.connect_attempts {
        match TcpStream::connect((cfg.host.as_str(), cfg.port)).await {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!(
                    error=%e,
                    attempt,
                    host=%cfg.host,
                    port=cfg.port,
                    "connect attempt failed"
                );
                if attempt < cfg.connect_attempts {
                    tokio::time::sleep(cfg.connect_retry_delay).await;
                }
            }
        }
    }
    Err(CycleError::ConnectionFailed {
        attempts: cfg.connect_attempts,
    })
}
