//! Live-game classification from status text
//!
//! Any status mentioning a period marker counts as live. Everything else,
//! including clock times such as "7:30 PM", is treated as not live; a running
//! clock shown that way without a marker is misread as a scheduled start.

/// Period markers that flag a game in progress (lowercase, matched as substrings)
const LIVE_MARKERS: [&str; 9] = ["q1", "q2", "q3", "q4", "halftime", "ot", "ot1", "ot2", "ot3"];

/// Whether a status string describes a game currently in progress
pub fn is_live_status(status: &str) -> bool {
    if status.is_empty() {
        return false;
    }

    let lower = status.to_lowercase();
    LIVE_MARKERS.iter().any(|marker| lower.contains(marker))
}
