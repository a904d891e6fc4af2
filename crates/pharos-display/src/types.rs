use anyhow::Result;
use async_trait::async_trait;

use pharos_common::LampColor;

/// A fixed strip of indicator lamps.
///
/// `set` stages a color into the local frame; nothing becomes visible until
/// `commit` flushes the whole frame to the device. The number of positions
/// is fixed for the lifetime of the strip.
#[async_trait]
pub trait LampStrip: Send {
    /// Number of physical lamp positions.
    fn positions(&self) -> usize;

    /// Stage `color` at `position` (0-based). Out of range is an error.
    fn set(&mut self, position: usize, color: LampColor) -> Result<()>;

    /// Flush the staged frame to the device.
    async fn commit(&mut self) -> Result<()>;
}
