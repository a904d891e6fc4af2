use std::io;

use thiserror::Error;

/// Everything that can end a polling cycle early.
///
/// Each variant is scoped to the cycle that raised it: the roster stays
/// frozen, the fault frame is rendered, and the next cycle starts from a
/// fresh connection. None of these is fatal to the process.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("connection failed after {attempts} attempts")]
    ConnectionFailed { attempts: u32 },

    #[error("no response byte within {waited_ms}ms")]
    ResponseTimeout { waited_ms: u64 },

    #[error("status payload exceeds buffer capacity of {capacity} bytes")]
    BufferOverflow { capacity: usize },

    #[error("malformed status payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("status payload has no presence field")]
    MissingPresenceField,

    #[error("i/o error on status connection: {0}")]
    Io(#[from] io::Error),

    #[error("lamp strip write failed: {0}")]
    Render(#[source] anyhow::Error),
}
