//! # Roster Identifiers
//!
//! Opaque indices into the participant directory and the squad-member
//! registry. Absence is always expressed with `Option`, never with a reserved
//! value, so index 0 is an ordinary participant or squad-member.

use std::fmt;

use crate::constants::SLOT_NONE;

/// Simulation tick counter. Monotonically increasing.
pub type Tick = u64;

/// Connection index of a participant (one connected game client).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Creates an id from a directory index.
    ///
    /// Returns `None` if the index does not fit the id width.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Returns the directory index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Registry index of a squad-member (one controllable unit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SquadMemberId(pub u32);

impl SquadMemberId {
    /// Creates an id from a registry index.
    ///
    /// Returns `None` if the index does not fit the id width.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Returns the registry index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Integer projection for consumers that use [`SLOT_NONE`] as "none".
    ///
    /// Indices that do not fit an `i32` also map to the sentinel.
    #[inline]
    #[must_use]
    pub fn raw_or_none(id: Option<Self>) -> i32 {
        id.and_then(|id| i32::try_from(id.0).ok())
            .unwrap_or(SLOT_NONE)
    }
}

impl fmt::Display for SquadMemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}
