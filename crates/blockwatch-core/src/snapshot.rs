//! Point-in-time status results and the roster derived from them.

use std::collections::BTreeSet;
use std::time::Duration;

/// One successful status query. Owned by the tick that produced it and
/// discarded once the roster has been derived.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Player names the server disclosed. May be empty even when players
    /// are online, if the server hides its sample.
    pub player_names: Vec<String>,
    pub online: u32,
    pub max: u32,
    pub version: String,
    pub latency: Duration,
}

/// The set of players considered present as of one snapshot.
///
/// Backed by a `BTreeSet`, so iteration — and therefore diff output — is
/// always in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceSet(BTreeSet<String>);

impl PresenceSet {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        snapshot.player_names.iter().cloned().collect()
    }

    /// Build a set from anything yielding names. Duplicates collapse.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for PresenceSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
