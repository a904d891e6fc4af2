use std::time::Duration;

use pharos_display::LampStrip;

use crate::error::CycleError;
use crate::extract::{extract_object, BoundedBuf};
use crate::fetch::{fetch, FetchConfig};
use crate::render::{render_fault, render_presence};
use crate::status::parse_status;
use crate::tracker::Roster;

/// The process-wide mutable state threaded through every cycle: the
/// reusable extraction buffer and the roster. The loop owns it and lends
/// it to exactly one cycle at a time, so nothing here needs locking.
pub struct PollState {
    scratch: BoundedBuf,
    roster: Roster,
}

impl PollState {
    pub fn new(capacity: usize, roster: Roster) -> Self {
        Self {
            scratch: BoundedBuf::with_capacity(capacity),
            roster,
        }
    }
}

/// What a successful cycle reports for the end-of-cycle log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    pub online: u64,
    pub observed: usize,
}

/// One full cycle: fetch, extract, parse, reconcile, render.
///
/// Any error abandons the cycle before the roster is touched, so every
/// failure leaves the previous presence state frozen.
pub async fn run_cycle(
    cfg: &FetchConfig,
    state: &mut PollState,
    strip: &mut dyn LampStrip,
) -> Result<CycleSummary, CycleError> {
    let stream = fetch(cfg).await?;
    extract_object(stream, &mut state.scratch).await?;
    tracing::debug!(bytes = state.scratch.len(), "payload extracted");
    let record = parse_status(state.scratch.as_slice())?;

    let colors = state.roster.reconcile(&record.names);
    render_presence(strip, &colors).await?;

    Ok(CycleSummary {
        online: record.online,
        observed: record.names.len(),
    })
}

/// One loop iteration including failure rendering. Returns whether the
/// cycle succeeded; shared by `poll_loop` and `--once`.
pub async fn run_once(
    cfg: &FetchConfig,
    state: &mut PollState,
    strip: &mut dyn LampStrip,
) -> bool {
    match run_cycle(cfg, state, strip).await {
        Ok(summary) => {
            tracing::info!(
                online = summary.online,
                observed = summary.observed,
                "cycle complete"
            );
            true
        }
        Err(e) => {
            tracing::warn!(error=%e, "cycle failed");
            if let Err(e) = render_fault(strip).await {
                tracing::warn!(error=%e, "fault render failed");
            }
            false
        }
    }
}

/// Poll forever: a cycle, the fixed delay, the next cycle. Cycle failures
/// render the fault frame and are never fatal.
pub async fn poll_loop(
    cfg: FetchConfig,
    interval: Duration,
    mut state: PollState,
    strip: &mut dyn LampStrip,
) {
    loop {
        run_once(&cfg, &mut state, strip).await;
        tokio::time::sleep(interval).await;
    }
}
