//! # Slot View
//!
//! Read-only roster queries for one tick. A view pairs the cached slot
//! table with the collaborators it was built from, so row-level questions
//! ("who leads", "what name goes here", "is this a bot") can be answered
//! without touching the engine.

use muster_shared::{ParticipantId, SquadMemberId};

use super::{AssignmentMode, SlotTable};
use crate::directory::{ParticipantDirectory, SquadRegistry};

/// Queries over one tick's slot table.
pub struct SlotView<'a, D: ?Sized, R: ?Sized> {
    table: &'a SlotTable,
    directory: &'a D,
    registry: &'a R,
}

impl<'a, D, R> SlotView<'a, D, R>
where
    D: ParticipantDirectory + ?Sized,
    R: SquadRegistry + ?Sized,
{
    /// Creates a view. The table should be current for the tick being drawn.
    #[must_use]
    pub fn new(table: &'a SlotTable, directory: &'a D, registry: &'a R) -> Self {
        Self {
            table,
            directory,
            registry,
        }
    }

    /// The underlying table.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &'a SlotTable {
        self.table
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn num_slots(&self) -> usize {
        self.table.len()
    }

    /// Squad-member in `slot`, or `None`.
    #[must_use]
    pub fn slot_to_squad_member_index(&self, slot: usize) -> Option<SquadMemberId> {
        self.table.slot_to_squad_member_index(slot)
    }

    /// Squad-member index in `slot`, or [`muster_shared::SLOT_NONE`].
    #[must_use]
    pub fn slot_to_squad_member_raw(&self, slot: usize) -> i32 {
        SquadMemberId::raw_or_none(self.slot_to_squad_member_index(slot))
    }

    /// Whether `slot` holds anyone.
    #[must_use]
    pub fn is_slot_occupied(&self, slot: usize) -> bool {
        self.table.is_slot_occupied(slot)
    }

    /// Whether `slot` belongs to the local participant.
    #[must_use]
    pub fn is_slot_local(&self, slot: usize) -> bool {
        self.table.is_slot_local(slot)
    }

    /// Participant in `slot`, or `None`.
    #[must_use]
    pub fn occupying_participant(&self, slot: usize) -> Option<ParticipantId> {
        self.table.occupying_participant(slot)
    }

    /// Number of occupied rows.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.table.occupied_count()
    }

    /// Row holding `member`.
    #[must_use]
    pub fn slot_of_squad_member(&self, member: SquadMemberId) -> Option<usize> {
        self.table.slot_of_squad_member(member)
    }

    /// First row occupied by `participant`.
    #[must_use]
    pub fn first_slot_of_participant(&self, participant: ParticipantId) -> Option<usize> {
        self.table.first_slot_of_participant(participant)
    }

    /// Name for the row.
    ///
    /// Offline rows are named after their squad-member, networked rows after
    /// their participant; each falls back to the other.
    #[must_use]
    pub fn display_name(&self, slot: usize) -> Option<&'a str> {
        let record = self.table.get(slot)?;
        let (directory, registry) = (self.directory, self.registry);
        let participant_name = || {
            record
                .participant()
                .and_then(|p| directory.display_name(p))
        };
        let member_name = || {
            record
                .squad_member()
                .and_then(|m| registry.display_name(m))
        };

        match self.table.mode() {
            AssignmentMode::Offline => member_name().or_else(participant_name),
            AssignmentMode::Networked | AssignmentMode::Fallback => {
                participant_name().or_else(member_name)
            }
        }
    }

    /// Whether the row's participant leads the lobby.
    #[must_use]
    pub fn is_slot_leader(&self, slot: usize) -> bool {
        let leader = self.directory.leader();
        leader.is_some() && self.occupying_participant(slot) == leader
    }

    /// First row held by the lobby leader.
    #[must_use]
    pub fn leader_slot(&self) -> Option<usize> {
        self.directory
            .leader()
            .and_then(|leader| self.first_slot_of_participant(leader))
    }

    /// Whether the row's participant has readied up.
    #[must_use]
    pub fn is_slot_ready(&self, slot: usize) -> bool {
        self.occupying_participant(slot)
            .is_some_and(|p| self.directory.is_ready(p))
    }

    /// Whether the row shows a squad-member its commander is not driving.
    #[must_use]
    pub fn is_slot_bot(&self, slot: usize) -> bool {
        let Some(record) = self.table.get(slot) else {
            return false;
        };
        match (record.participant(), record.squad_member()) {
            (Some(participant), Some(member)) => {
                self.directory.controlling(participant) != Some(member)
            }
            _ => false,
        }
    }
}
