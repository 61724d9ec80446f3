//! # In-Memory Lobby Tables
//!
//! Fixed-capacity implementations of the collaborator traits.
//!
//! ## Design
//!
//! - Entries are pre-allocated; ids are indices into them
//! - A freed index is reused by the next join or spawn
//! - Stale ids never dangle: they just stop reporting as connected/present

mod participants;
mod squad;

pub use participants::{ParticipantEntry, ParticipantTable};
pub use squad::{SquadEntry, SquadTable};
