//! Domain models persisted to the score store
//!
//! Game records are written to `scores.json` exactly as serialized here, so the
//! field names double as the contract with the static front end.

mod date;
mod game;

pub use date::{DateKey, date_key, date_label, date_window, today};
pub use game::{GameRecord, RawTeamSide, TeamIdentity, TeamSide};
