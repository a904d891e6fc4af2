use pharos_common::{Identity, LampColor};

/// One tracked entry: an identity plus its online flag for the previous
/// and the current cycle.
#[derive(Debug)]
pub struct Slot {
    identity: Identity,
    was_online: bool,
    is_online: bool,
}

impl Slot {
    fn new(identity: Identity) -> Self {
        Self {
            identity,
            was_online: false,
            is_online: false,
        }
    }
}

/// The fixed, ordered roster of tracked slots.
///
/// Order is significant: observed names are claimed first-match-wins in
/// declaration order, so a wildcard slot ahead of a named slot shadows it.
/// The roster lives for the whole process; only `reconcile` mutates it.
#[derive(Debug)]
pub struct Roster {
    slots: Vec<Slot>,
}

impl Roster {
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            slots: identities.into_iter().map(Slot::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fold one cycle's observed names into the roster and return the color
    /// for every slot, in slot order.
    ///
    /// Runs only on successful cycles. A failed cycle never calls this,
    /// which is what keeps the previous state frozen until the next
    /// successful one.
    pub fn reconcile<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<LampColor> {
        for slot in &mut self.slots {
            slot.is_online = false;
        }

        for name in names {
            let name = name.as_ref();
            // First match wins; a name no slot claims is silently ignored.
            if let Some(slot) = self
                .slots
                .iter_mut()
                .find(|slot| slot.identity.matches(name))
            {
                slot.is_online = true;
            }
        }

        let colors: Vec<LampColor> = self
            .slots
            .iter()
            .map(|slot| LampColor::from_transition(slot.was_online, slot.is_online))
            .collect();

        for (position, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_online != slot.was_online {
                if slot.is_online {
                    tracing::info!(position, identity=%slot.identity, "joined");
                } else {
                    tracing::info!(position, identity=%slot.identity, "left");
                }
            }
            slot.was_online = slot.is_online;
        }

        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[&str]) -> Roster {
        Roster::new(entries.iter().map(|s| s.parse::<Identity>().unwrap()))
    }

    #[test]
    fn test_named_slot_exact_match_only() {
        let mut r = roster(&["Alice"]);
        assert_eq!(r.reconcile(&["alice"]), vec![LampColor::Off]);
        assert_eq!(r.reconcile(&["Alice"]), vec![LampColor::JustJoined]);
    }

    #[test]
    fn test_wildcard_claims_any_name() {
        let mut r = roster(&["*"]);
        assert_eq!(r.reconcile(&["Whoever"]), vec![LampColor::JustJoined]);
        assert_eq!(r.reconcile(&["SomeoneElse"]), vec![LampColor::SteadyPresent]);
    }

    #[test]
    fn test_earlier_wildcard_shadows_named_slot() {
        let mut r = roster(&["*", "Alice"]);
        assert_eq!(
            r.reconcile(&["Alice"]),
            vec![LampColor::JustJoined, LampColor::Off]
        );
    }

    #[test]
    fn test_steady_state_is_idempotent() {
        let mut r = roster(&["Alice", "Bob"]);
        r.reconcile(&["Alice"]);
        assert_eq!(
            r.reconcile(&["Alice"]),
            vec![LampColor::SteadyPresent, LampColor::Off]
        );
        assert_eq!(
            r.reconcile(&["Alice"]),
            vec![LampColor::SteadyPresent, LampColor::Off]
        );
    }

    #[test]
    fn test_join_then_steady_then_leave() {
        let mut r = roster(&["Alice"]);
        assert_eq!(r.reconcile(&["Alice"]), vec![LampColor::JustJoined]);
        assert_eq!(r.reconcile(&["Alice"]), vec![LampColor::SteadyPresent]);
        let empty: [&str; 0] = [];
        assert_eq!(r.reconcile(&empty), vec![LampColor::JustLeft]);
        assert_eq!(r.reconcile(&empty), vec![LampColor::Off]);
    }

    #[test]
    fn test_named_then_wildcard_roster() {
        let mut r = roster(&["Bob", "*"]);
        assert_eq!(
            r.reconcile(&["Bob"]),
            vec![LampColor::JustJoined, LampColor::Off]
        );
    }

    #[test]
    fn test_unclaimed_name_is_ignored() {
        let mut r = roster(&["Alice"]);
        assert_eq!(r.reconcile(&["Bob"]), vec![LampColor::Off]);
    }

    #[test]
    fn test_wildcard_absorbs_extra_names() {
        let mut r = roster(&["Alice", "*"]);
        assert_eq!(
            r.reconcile(&["Bob", "Alice", "Carol"]),
            vec![LampColor::JustJoined, LampColor::JustJoined]
        );
    }
}
