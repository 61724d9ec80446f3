//! # Roster Constants
//!
//! Defaults for the roster configuration.
//!
//! **NOTE:** The briefing layout is built for `DEFAULT_NUM_SLOTS` rows.
//! Other values are accepted by the engine but the UI may not lay them out.

// =============================================================================
// SLOT TABLE
// =============================================================================

/// Number of roster rows on the briefing screen.
pub const DEFAULT_NUM_SLOTS: usize = 4;

/// Upper bound on `num_slots` accepted from configuration.
///
/// The duplicate check during assignment is a linear scan of filled slots,
/// so the table must stay small.
pub const MAX_SLOTS: usize = 16;

/// Integer form of "no squad-member in this slot".
pub const SLOT_NONE: i32 = -1;

// =============================================================================
// ENUMERATION BOUNDS
// =============================================================================

/// Highest connection index scanned when enumerating participants.
pub const DEFAULT_MAX_PARTICIPANTS: usize = 32;

/// Highest registry index scanned when enumerating squad-members.
pub const DEFAULT_MAX_SQUAD_MEMBERS: usize = 8;
