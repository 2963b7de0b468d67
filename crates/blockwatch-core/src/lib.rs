//! Presence reconciliation for blockwatch.
//!
//! Polls a status source on a fixed interval, diffs the current roster
//! against the previous one, and forwards join/leave events to a
//! notification sink. The first successful poll only seeds the tracked
//! roster — nobody who was already online when the watcher starts gets
//! re-announced.

mod diff;
mod fetcher;
mod sink;
mod snapshot;
mod watcher;

pub use diff::{diff, PresenceDiff, PresenceEvent};
pub use fetcher::{FetchError, StatusFetcher};
pub use sink::{NotificationSink, SinkError};
pub use snapshot::{PresenceSet, Snapshot};
pub use watcher::PresenceWatcher;
