use anyhow::{bail, Result};
use async_trait::async_trait;

use pharos_common::LampColor;

use crate::types::LampStrip;

/// In-memory strip that records every committed frame. Drop-in for tests
/// and for running the agent headless.
#[derive(Debug, Clone, Default)]
pub struct MemoryStrip {
    frame: Vec<LampColor>,
    committed: Vec<Vec<LampColor>>,
}

impl MemoryStrip {
    pub fn new(positions: usize) -> Self {
        Self {
            frame: vec![LampColor::Off; positions],
            committed: Vec::new(),
        }
    }

    /// Frames flushed so far, oldest first.
    pub fn committed(&self) -> &[Vec<LampColor>] {
        &self.committed
    }

    /// The most recently committed frame, if any.
    pub fn last_committed(&self) -> Option<&[LampColor]> {
        self.committed.last().map(Vec::as_slice)
    }
}

#[async_trait]
impl LampStrip for MemoryStrip {
    fn positions(&self) -> usize {
        self.frame.len()
    }

    fn set(&mut self, position: usize, color: LampColor) -> Result<()> {
        match self.frame.get_mut(position) {
            Some(lamp) => {
                *lamp = color;
                Ok(())
            }
            None => bail!(
                "lamp position {} out of range, strip has {}",
                position,
                self.frame.len()
            ),
        }
    }

    async fn commit(&mut self) -> Result<()> {
        self.committed.push(self.frame.clone());
        Ok(())
    }
}
