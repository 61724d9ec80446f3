//! # MUSTER Shared
//!
//! Common types used by the roster engine and by the UI code that consumes it.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER read simulation state. It only names things:
//! - identifiers for participants and squad-members
//! - slot capacity constants
//! - the roster configuration file and its errors

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;

pub use config::RosterConfig;
pub use constants::{
    DEFAULT_MAX_PARTICIPANTS, DEFAULT_MAX_SQUAD_MEMBERS, DEFAULT_NUM_SLOTS, MAX_SLOTS, SLOT_NONE,
};
pub use error::{ConfigError, ConfigResult};
pub use ids::{ParticipantId, SquadMemberId, Tick};
