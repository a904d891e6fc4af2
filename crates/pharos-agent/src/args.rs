use std::time::Duration;

use clap::Parser;

use pharos_common::Identity;

use crate::fetch::FetchConfig;

#[derive(Debug, Parser)]
pub struct Args {
    /// Host serving the status endpoint.
    #[arg(long, env = "PHAROS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PHAROS_PORT", default_value_t = 80)]
    pub port: u16,

    /// Request path on the status host.
    #[arg(long, env = "PHAROS_PATH", default_value = "/status")]
    pub path: String,

    /// Delay between polling cycles, in seconds.
    #[arg(long, default_value_t = 10)]
    pub poll_interval_secs: u64,

    /// Payload buffer capacity in bytes; a larger payload fails the cycle.
    #[arg(long, default_value_t = 4096)]
    pub capacity: usize,

    /// Connection attempts per cycle before the cycle fails.
    #[arg(long, default_value_t = 3)]
    pub connect_attempts: u32,

    /// Delay between connection attempts, in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub connect_retry_delay_ms: u64,

    /// How long to wait for the first response byte, in milliseconds.
    #[arg(long, default_value_t = 5_000)]
    pub first_byte_deadline_ms: u64,

    /// Number of physical lamp positions on the strip.
    #[arg(long, default_value_t = 8)]
    pub lamps: usize,

    /// Tracked identity per lamp position, in order; repeatable. `*` marks
    /// the wildcard slot, which claims any name not otherwise tracked.
    #[arg(long = "lamp")]
    pub roster: Vec<Identity>,

    /// Run a single cycle and exit with its status instead of polling
    /// forever. Useful for smoke-testing a deployment.
    #[arg(long, default_value_t = false)]
    pub once: bool,
}

impl Args {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            host: self.host.clone(),
            port: self.port,
            path: self.path.clone(),
            connect_attempts: self.connect_attempts,
            connect_retry_delay: Duration::from_millis(self.connect_retry_delay_ms),
            first_byte_deadline: Duration::from_millis(self.first_byte_deadline_ms),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
