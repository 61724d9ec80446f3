//! # MUSTER Core
//!
//! Packs the participants of a lobby, and the squad-members each one
//! commands, into the fixed rows of the briefing roster.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │ ParticipantDirectory │   │    SquadRegistry     │
//! │ (who is connected)   │   │ (who commands what)  │
//! └──────────┬───────────┘   └──────────┬───────────┘
//!            └────────────┬─────────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │     SlotEngine      │  once per tick
//!              │  recompute_if_stale │
//!              └──────────┬──────────┘
//!                         ▼
//!              ┌─────────────────────┐
//!              │      SlotTable      │  slot 0 .. num_slots
//!              └──────────┬──────────┘
//!            ┌────────────┴─────────────┐
//!            ▼                          ▼
//!      ┌───────────┐          ┌─────────────────────┐
//!      │ SlotView  │          │ DoubleBufferedTable │
//!      │ (UI rows) │          │ (other threads)     │
//!      └───────────┘          └─────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use muster_core::{Briefing, ParticipantTable, SquadTable};
//! use muster_shared::RosterConfig;
//!
//! let mut participants = ParticipantTable::new(8);
//! let local = participants.connect("Sarge", true).unwrap();
//! let mut squad = SquadTable::new(8);
//! let member = squad.spawn("Wildcat").unwrap();
//! squad.assign(member, Some(local));
//!
//! let mut briefing = Briefing::new(RosterConfig::default(), participants, squad);
//! let view = briefing.view(1);
//! assert_eq!(view.occupying_participant(0), Some(local));
//! assert_eq!(view.slot_to_squad_member_index(0), Some(member));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod briefing;
pub mod directory;
pub mod lobby;
pub mod slot;
pub mod sync;

pub use briefing::Briefing;
pub use directory::{ParticipantDirectory, SquadRegistry};
pub use lobby::{ParticipantTable, SquadTable};
pub use slot::{AssignmentMode, RecomputeStats, SlotEngine, SlotRecord, SlotTable, SlotView};
pub use sync::{DoubleBufferedTable, TableReadHandle, TableWriteHandle};

pub use muster_shared::{ParticipantId, RosterConfig, SquadMemberId, Tick};
