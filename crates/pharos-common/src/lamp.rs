use serde::{Deserialize, Serialize};

/// Fixed palette understood by every lamp strip implementation.
///
/// The first four variants are per-slot transition colors; `Fault` is the
/// whole-strip indicator shown when a polling cycle fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LampColor {
    Off,
    SteadyPresent,
    JustJoined,
    JustLeft,
    Fault,
}

impl LampColor {
    /// Color for one slot given its online flag in the previous and the
    /// current cycle. `JustJoined`/`JustLeft` are edge markers: they hold
    /// for exactly one cycle after the transition.
    pub fn from_transition(was_online: bool, is_online: bool) -> Self {
        match (was_online, is_online) {
            (true, true) => LampColor::SteadyPresent,
            (true, false) => LampColor::JustLeft,
            (false, true) => LampColor::JustJoined,
            (false, false) => LampColor::Off,
        }
    }
}
