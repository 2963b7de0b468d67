//! Pure set-difference between two consecutive rosters.

use crate::snapshot::PresenceSet;

/// A player joined or left between two consecutive successful polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceEvent {
    Arrived { name: String },
    Departed { name: String },
}

impl PresenceEvent {
    pub fn name(&self) -> &str {
        match self {
            PresenceEvent::Arrived { name } | PresenceEvent::Departed { name } => name,
        }
    }
}

/// Membership changes between two rosters. Both lists are lexicographically
/// ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceDiff {
    pub arrived: Vec<String>,
    pub departed: Vec<String>,
}

impl PresenceDiff {
    pub fn is_empty(&self) -> bool {
        self.arrived.is_empty() && self.departed.is_empty()
    }

    /// Flatten into sink events, arrivals first.
    pub fn into_events(self) -> Vec<PresenceEvent> {
        let mut events = Vec::with_capacity(self.arrived.len() + self.departed.len());
        events.extend(
            self.arrived
                .into_iter()
                .map(|name| PresenceEvent::Arrived { name }),
        );
        events.extend(
            self.departed
                .into_iter()
                .map(|name| PresenceEvent::Departed { name }),
        );
        events
    }
}

/// Compute who joined (`current − previous`) and who left
/// (`previous − current`).
pub fn diff(previous: &PresenceSet, current: &PresenceSet) -> PresenceDiff {
    PresenceDiff {
        arrived: current
            .iter()
            .filter(|&name| !previous.contains(name))
            .map(str::to_string)
            .collect(),
        departed: previous
            .iter()
            .filter(|&name| !current.contains(name))
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> PresenceSet {
        PresenceSet::from_names(names.iter().copied())
    }

    #[test]
    fn detects_join_and_leave() {
        let changes = diff(&set(&["Alice", "Bob"]), &set(&["Alice", "Carol"]));
        assert_eq!(changes.arrived, vec!["Carol"]);
        assert_eq!(changes.departed, vec!["Bob"]);
    }

    #[test]
    fn identical_rosters_are_quiet() {
        let roster = set(&["Eve", "Frank"]);
        let changes = diff(&roster, &roster);
        assert!(changes.is_empty());
    }

    #[test]
    fn both_empty_is_quiet() {
        assert!(diff(&set(&[]), &set(&[])).is_empty());
    }

    #[test]
    fn join_onto_empty_server() {
        let changes = diff(&set(&[]), &set(&["Dave"]));
        assert_eq!(changes.arrived, vec!["Dave"]);
        assert!(changes.departed.is_empty());
    }

    #[test]
    fn everyone_leaving_is_all_departed() {
        let changes = diff(&set(&["Alice", "Bob"]), &set(&[]));
        assert!(changes.arrived.is_empty());
        assert_eq!(changes.departed, vec!["Alice", "Bob"]);
    }

    #[test]
    fn output_is_lexicographic() {
        let changes = diff(&set(&[]), &set(&["zeta", "alpha", "mid"]));
        assert_eq!(changes.arrived, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn events_list_arrivals_before_departures() {
        let events = diff(&set(&["Bob"]), &set(&["Alice"])).into_events();
        assert_eq!(
            events,
            vec![
                PresenceEvent::Arrived {
                    name: "Alice".into()
                },
                PresenceEvent::Departed { name: "Bob".into() },
            ]
        );
    }
}
