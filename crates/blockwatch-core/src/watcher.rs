//! The reconciliation loop: poll, diff, notify, repeat.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::diff::diff;
use crate::fetcher::StatusFetcher;
use crate::sink::NotificationSink;
use crate::snapshot::PresenceSet;

/// Tracking state. The previous roster lives inside `Tracking`, so there
/// is no roster to diff against until the first successful poll has
/// happened — which is exactly the tick that must stay silent.
#[derive(Debug)]
enum WatchState {
    Uninitialized,
    Tracking(PresenceSet),
}

/// Periodically polls a [`StatusFetcher`] and reports roster changes to a
/// [`NotificationSink`].
///
/// Ticks are strictly sequential: the interval uses
/// [`MissedTickBehavior::Delay`], so a poll that outlives the interval
/// pushes the next tick back instead of overlapping it. The state is owned
/// by the watcher alone; nothing else reads or writes it.
pub struct PresenceWatcher<F, S> {
    fetcher: F,
    sink: S,
    interval: Duration,
    state: WatchState,
}

impl<F: StatusFetcher, S: NotificationSink> PresenceWatcher<F, S> {
    pub fn new(fetcher: F, sink: S, interval: Duration) -> Self {
        Self {
            fetcher,
            sink,
            interval,
            state: WatchState::Uninitialized,
        }
    }

    /// Run until the process exits. The first tick fires immediately.
    pub async fn run(mut self) {
        info!(interval_secs = self.interval.as_secs(), "presence watcher started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    /// One reconciliation cycle. A failed poll leaves the tracked roster
    /// exactly as it was, so a transient outage never turns into a false
    /// mass-departure on recovery.
    pub async fn tick(&mut self) {
        let snapshot = match self.fetcher.fetch().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "status query failed, keeping previous roster");
                return;
            }
        };
        let current = PresenceSet::from_snapshot(&snapshot);

        match &self.state {
            WatchState::Uninitialized => {
                // First successful poll seeds the roster without announcing
                // players who were already online before we started.
                info!(players = current.len(), "initial roster established");
                self.state = WatchState::Tracking(current);
            }
            WatchState::Tracking(previous) => {
                let changes = diff(previous, &current);
                if changes.is_empty() {
                    debug!(players = current.len(), "no presence changes");
                } else {
                    debug!(
                        arrived = changes.arrived.len(),
                        departed = changes.departed.len(),
                        "presence changed"
                    );
                    if let Err(e) = self.sink.emit(&changes.into_events()).await {
                        warn!(error = %e, "failed to deliver presence events");
                    }
                }
                self.state = WatchState::Tracking(current);
            }
        }
    }
}
