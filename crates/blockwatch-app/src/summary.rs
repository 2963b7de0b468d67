//! Plain-text rendering of a one-off status query.

use std::fmt::Write as _;
use std::time::Duration;

use blockwatch_core::Snapshot;

pub fn latency_display(latency: Duration) -> String {
    format!("{:.2}ms", latency.as_secs_f64() * 1000.0)
}

/// Multi-line summary for terminal output.
pub fn format_summary(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Minecraft Server Status");
    let _ = writeln!(out, "Players Online: {}/{}", snapshot.online, snapshot.max);
    let _ = writeln!(out, "Version: {}", snapshot.version);
    let _ = writeln!(out, "Latency: {}", latency_display(snapshot.latency));
    if !snapshot.player_names.is_empty() {
        let _ = writeln!(out, "Online Players:");
        for name in &snapshot.player_names {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(names: &[&str]) -> Snapshot {
        Snapshot {
            player_names: names.iter().map(|n| n.to_string()).collect(),
            online: names.len() as u32,
            max: 20,
            version: "1.21.4".into(),
            latency: Duration::from_micros(42_130),
        }
    }

    #[test]
    fn latency_renders_with_two_decimals() {
        assert_eq!(latency_display(Duration::from_micros(42_130)), "42.13ms");
    }

    #[test]
    fn summary_lists_players() {
        let text = format_summary(&snapshot(&["Alice", "Bob"]));
        assert!(text.contains("Players Online: 2/20"));
        assert!(text.contains("Version: 1.21.4"));
        assert!(text.contains("Latency: 42.13ms"));
        assert!(text.contains("  Alice\n  Bob\n"));
    }

    #[test]
    fn summary_omits_player_section_when_hidden() {
        let text = format_summary(&snapshot(&[]));
        assert!(!text.contains("Online Players"));
    }
}
