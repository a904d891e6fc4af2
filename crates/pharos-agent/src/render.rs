use pharos_common::LampColor;
use pharos_display::LampStrip;

use crate::error::CycleError;

/// Push one cycle's roster colors to the strip: slot `i` at position `i`,
/// every position past the roster held at `Off`.
pub async fn render_presence(
    strip: &mut dyn LampStrip,
    colors: &[LampColor],
) -> Result<(), CycleError> {
    for position in 0..strip.positions() {
        let color = colors.get(position).copied().unwrap_or(LampColor::Off);
        strip.set(position, color).map_err(CycleError::Render)?;
    }
    strip.commit().await.map_err(CycleError::Render)
}

/// Solid fault frame for a failed cycle. The roster is not consulted; its
/// state stays frozen for the next successful cycle.
pub async fn render_fault(strip: &mut dyn LampStrip) -> Result<(), CycleError> {
    for position in 0..strip.positions() {
        strip
            .set(position, LampColor::Fault)
            .map_err(CycleError::Render)?;
    }
    strip.commit().await.map_err(CycleError::Render)
}
