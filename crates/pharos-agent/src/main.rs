mod args;
mod error;
mod extract;
mod fetch;
mod poll;
mod render;
mod status;
mod tracker;

use clap::Parser;

use pharos_common::telemetry;
use pharos_display::AnsiStrip;

use crate::args::Args;
use crate::poll::{poll_loop, run_once, PollState};
use crate::tracker::Roster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let args = Args::parse();
    tracing::info!(host=%args.host, port=args.port, path=%args.path, "pharos-agent starting");

    let roster = build_roster(&args)?;
    let mut strip = AnsiStrip::new(args.lamps);
    let cfg = args.fetch_config();
    let mut state = PollState::new(args.capacity, roster);

    if args.once {
        let ok = run_once(&cfg, &mut state, &mut strip).await;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    poll_loop(cfg, args.poll_interval(), state, &mut strip).await;
    Ok(())
}

/// Startup invariants for the roster: non-empty, at most one wildcard, no
/// more entries than physical lamp positions.
fn build_roster(args: &Args) -> anyhow::Result<Roster> {
    let wildcards = args.roster.iter().filter(|id| id.is_wildcard()).count();
    if wildcards > 1 {
        anyhow::bail!("at most one wildcard --lamp '*' entry is allowed, got {wildcards}");
    }

    let roster = Roster::new(args.roster.iter().cloned());
    if roster.is_empty() {
        anyhow::bail!("at least one --lamp entry is required");
    }
    if roster.len() > args.lamps {
        anyhow::bail!(
            "{} --lamp entries exceed {} lamp positions",
            roster.len(),
            args.lamps
        );
    }
    Ok(roster)
}
