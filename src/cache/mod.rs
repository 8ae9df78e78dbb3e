//! Local score cache
//!
//! `scores.json` holds date-bucketed games and is updated by a full-window
//! refresh or a live-only refresh. `teams/` holds per-team schedule
//! snapshots.

pub mod live;
pub mod refresh;
pub mod storage;
pub mod teams;

// Re-export main types
pub use live::is_live_status;
pub use refresh::{full_refresh, live_refresh};
pub use storage::ScoreStore;
pub use teams::{TeamHistoryCache, collect_team_identities};
