use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who a roster slot tracks: one exact name, or whichever observed name is
/// not otherwise claimed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Identity {
    Name(String),
    Wildcard,
}

impl Identity {
    /// Exact-string match for named slots; the wildcard claims any name.
    pub fn matches(&self, observed: &str) -> bool {
        match self {
            Identity::Name(name) => name == observed,
            Identity::Wildcard => true,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Identity::Wildcard)
    }
}

/// `*` on the command line means the wildcard slot; anything else is taken
/// verbatim as a name. The sentinel exists only at this parse boundary.
impl FromStr for Identity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            Ok(Identity::Wildcard)
        } else {
            Ok(Identity::Name(s.to_string()))
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Name(name) => f.write_str(name),
            Identity::Wildcard => f.write_str("*"),
        }
    }
}
