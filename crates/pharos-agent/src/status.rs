use std::borrow::Cow;

use serde::Deserialize;

use crate::error::CycleError;

/// Normalized view of one status payload.
///
/// Names borrow straight from the cycle's extraction buffer; the record
/// must be fully consumed before the buffer is reused, which the borrow
/// checker enforces.
#[derive(Debug, PartialEq, Eq)]
pub struct StatusRecord<'a> {
    /// Reported online count. May exceed `names.len()`: the server samples
    /// the name list and does not guarantee it is exhaustive.
    pub online: u64,
    pub names: Vec<Cow<'a, str>>,
}

#[derive(Debug, Deserialize)]
struct StatusDocument<'a> {
    #[serde(borrow)]
    players: Option<Players<'a>>,
}

#[derive(Debug, Deserialize)]
struct Players<'a> {
    online: u64,
    #[serde(borrow, default)]
    sample: Vec<PlayerEntry<'a>>,
}

#[derive(Debug, Deserialize)]
struct PlayerEntry<'a> {
    #[serde(borrow)]
    name: Cow<'a, str>,
}

/// Parse the extracted object into a status record.
///
/// A well-formed payload without the `players` field fails the cycle the
/// same way malformed JSON does; it is not treated as "zero entities".
pub fn parse_status(raw: &[u8]) -> Result<StatusRecord<'_>, CycleError> {
    let doc: StatusDocument<'_> = serde_json::from_slice(raw)?;
    let players = doc.players.ok_or(CycleError::MissingPresenceField)?;
    Ok(StatusRecord {
        online: players.online,
        names: players.sample.into_iter().map(|p| p.name).collect(),
    })
}
