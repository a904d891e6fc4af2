use std::io::Write;

use anyhow::{bail, Result};
use async_trait::async_trait;

use pharos_common::LampColor;

use crate::types::LampStrip;

/// Renders the lamp frame as a single line of colored dots on the
/// controlling terminal, rewritten in place on every commit.
pub struct AnsiStrip {
    frame: Vec<LampColor>,
}

impl AnsiStrip {
    pub fn new(positions: usize) -> Self {
        Self {
            frame: vec![LampColor::Off; positions],
        }
    }
}

/// SGR foreground code per palette entry.
fn sgr(color: LampColor) -> &'static str {
    match color {
        LampColor::Off => "90",
        LampColor::SteadyPresent => "32",
        LampColor::JustJoined => "92",
        LampColor::JustLeft => "33",
        LampColor::Fault => "31",
    }
}

#[async_trait]
impl LampStrip for AnsiStrip {
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
        let mut line = String::with_capacity(self.frame.len() * 12 + 8);
        line.push('\r');
        for color in &self.frame {
            line.push_str("\x1b[");
            line.push_str(sgr(*color));
            line.push_str("m\u{25cf} ");
        }
        line.push_str("\x1b[0m");

        let mut out = std::io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
