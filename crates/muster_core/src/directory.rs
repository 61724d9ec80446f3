//! # Collaborator Seams
//!
//! The engine never owns lobby state. The host implements these two traits
//! over whatever it keeps its participants and units in.
//!
//! ```text
//! Host implements:            Engine reads:
//! ┌──────────────────────┐    ┌─────────────┐
//! │ ParticipantDirectory │ ─→ │ SlotEngine  │
//! │ SquadRegistry        │ ─→ │             │
//! └──────────────────────┘    └─────────────┘
//! ```
//!
//! Both are assumed internally consistent for the duration of one tick.

use muster_shared::{ParticipantId, SquadMemberId};

/// Connected game clients, addressed by connection index.
pub trait ParticipantDirectory {
    /// Whether the directory can be queried at all.
    ///
    /// While unavailable the engine places only the local participant.
    fn is_available(&self) -> bool {
        true
    }

    /// Whether the session is networked.
    ///
    /// When false the engine uses offline mode, where registry index and slot
    /// index coincide.
    fn is_networked(&self) -> bool;

    /// Number of connection indices that may hold a participant.
    fn capacity(&self) -> usize;

    /// Whether a participant is connected at this index.
    fn is_connected(&self, id: ParticipantId) -> bool;

    /// Whether the participant is the one running this client.
    fn is_local(&self, id: ParticipantId) -> bool;

    /// The connected local participant, lowest index first.
    fn local_participant(&self) -> Option<ParticipantId> {
        (0..self.capacity())
            .filter_map(ParticipantId::from_index)
            .find(|&id| self.is_connected(id) && self.is_local(id))
    }

    /// The squad-member the participant is actively driving, if any.
    fn controlling(&self, _id: ParticipantId) -> Option<SquadMemberId> {
        None
    }

    /// Name shown for the participant in roster rows.
    fn display_name(&self, _id: ParticipantId) -> Option<&str> {
        None
    }

    /// The lobby leader.
    fn leader(&self) -> Option<ParticipantId> {
        None
    }

    /// Whether the participant has readied up.
    fn is_ready(&self, _id: ParticipantId) -> bool {
        false
    }
}

/// Controllable units, addressed by registry index.
pub trait SquadRegistry {
    /// Whether the registry can be queried at all.
    ///
    /// While unavailable the engine places only the local participant.
    fn is_available(&self) -> bool {
        true
    }

    /// Number of registry indices that may hold a squad-member.
    fn capacity(&self) -> usize;

    /// Whether a squad-member exists at this index.
    fn exists(&self, id: SquadMemberId) -> bool;

    /// The participant currently commanding the squad-member.
    fn commanding_participant(&self, id: SquadMemberId) -> Option<ParticipantId>;

    /// Name shown for the squad-member in roster rows.
    fn display_name(&self, _id: SquadMemberId) -> Option<&str> {
        None
    }
}
