//! # Slot Table
//!
//! The fixed-size ordered roster the briefing UI indexes by position.
//!
//! ## Layout (networked, 4 slots)
//!
//! ```text
//! slot 0  │ local participant   + its lowest-index squad-member (or none)
//! slot 1  │ local participant's other squad-members          (tier A)
//! slot 2  │ other participants' squad-members, by conn index (tier B)
//! slot 3  │ other participants with no squad-member          (tier C)
//! ```
//!
//! Rows past the last placed entry are [`SlotRecord::Empty`].

mod engine;
mod view;

pub use engine::{RecomputeStats, SlotEngine};
pub use view::SlotView;

use muster_shared::{ParticipantId, SquadMemberId};

/// One row of the slot table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlotRecord {
    /// Nobody in this row.
    #[default]
    Empty,
    /// A participant with no squad-member.
    Participant(ParticipantId),
    /// A participant together with a squad-member it commands.
    Commanding {
        /// Occupying participant.
        participant: ParticipantId,
        /// Occupying squad-member.
        squad_member: SquadMemberId,
    },
}

impl SlotRecord {
    /// Occupying participant, if any.
    #[inline]
    #[must_use]
    pub const fn participant(self) -> Option<ParticipantId> {
        match self {
            Self::Empty => None,
            Self::Participant(participant) | Self::Commanding { participant, .. } => {
                Some(participant)
            }
        }
    }

    /// Occupying squad-member, if any.
    #[inline]
    #[must_use]
    pub const fn squad_member(self) -> Option<SquadMemberId> {
        match self {
            Self::Commanding { squad_member, .. } => Some(squad_member),
            _ => None,
        }
    }

    /// True unless the row is empty.
    #[inline]
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Which assignment rules produced a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssignmentMode {
    /// Single controlling participant: registry index is slot index.
    Offline,
    /// Slot 0 reserved for the local participant, then tiers A, B, C.
    Networked,
    /// A collaborator was unavailable or there was no local participant.
    /// At most slot 0 is filled.
    #[default]
    Fallback,
}

/// Fixed-capacity ordered roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotTable {
    records: Box<[SlotRecord]>,
    mode: AssignmentMode,
    local: Option<ParticipantId>,
}

impl SlotTable {
    /// Creates an all-empty table with `num_slots` rows.
    #[must_use]
    pub fn new(num_slots: usize) -> Self {
        Self {
            records: vec![SlotRecord::Empty; num_slots].into_boxed_slice(),
            mode: AssignmentMode::Fallback,
            local: None,
        }
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows in slot order.
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[SlotRecord] {
        &self.records
    }

    /// Row at `slot`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<SlotRecord> {
        self.records.get(slot).copied()
    }

    /// Rules that produced this table.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> AssignmentMode {
        self.mode
    }

    /// Local participant observed when the table was built.
    #[inline]
    #[must_use]
    pub fn local(&self) -> Option<ParticipantId> {
        self.local
    }

    /// Squad-member in `slot`; `None` if out of range, empty, or
    /// participant-only.
    #[must_use]
    pub fn slot_to_squad_member_index(&self, slot: usize) -> Option<SquadMemberId> {
        self.get(slot).and_then(SlotRecord::squad_member)
    }

    /// Whether `slot` holds anyone. Out of range is unoccupied.
    #[must_use]
    pub fn is_slot_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some_and(SlotRecord::is_occupied)
    }

    /// Whether `slot` belongs to the local participant.
    ///
    /// Slot 0 is reserved for the local participant, and in offline mode
    /// every row is local, so both always report true. Out of range is false.
    #[must_use]
    pub fn is_slot_local(&self, slot: usize) -> bool {
        let Some(record) = self.get(slot) else {
            return false;
        };
        if slot == 0 || self.mode == AssignmentMode::Offline {
            return true;
        }
        record.participant().is_some() && record.participant() == self.local
    }

    /// Participant in `slot`.
    #[must_use]
    pub fn occupying_participant(&self, slot: usize) -> Option<ParticipantId> {
        self.get(slot).and_then(SlotRecord::participant)
    }

    /// Number of occupied rows.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_occupied()).count()
    }

    /// Row holding `member`.
    #[must_use]
    pub fn slot_of_squad_member(&self, member: SquadMemberId) -> Option<usize> {
        self.records.iter().position(|r| r.squad_member() == Some(member))
    }

    /// First row occupied by `participant`.
    #[must_use]
    pub fn first_slot_of_participant(&self, participant: ParticipantId) -> Option<usize> {
        self.records.iter().position(|r| r.participant() == Some(participant))
    }

    /// Overwrites this table with `other`, reusing the allocation when the
    /// row counts match.
    pub fn copy_from(&mut self, other: &Self) {
        if self.records.len() == other.records.len() {
            self.records.copy_from_slice(&other.records);
        } else {
            self.records = other.records.clone();
        }
        self.mode = other.mode;
        self.local = other.local;
    }

    fn clear(&mut self, mode: AssignmentMode, local: Option<ParticipantId>) {
        self.records.fill(SlotRecord::Empty);
        self.mode = mode;
        self.local = local;
    }

    fn records_mut(&mut self) -> &mut [SlotRecord] {
        &mut self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn networked_table() -> SlotTable {
        let mut table = SlotTable::new(4);
        table.clear(AssignmentMode::Networked, Some(ParticipantId(1)));
        let rows = table.records_mut();
        rows[0] = SlotRecord::Commanding {
            participant: ParticipantId(1),
            squad_member: SquadMemberId(3),
        };
        rows[1] = SlotRecord::Commanding {
            participant: ParticipantId(1),
            squad_member: SquadMemberId(5),
        };
        rows[2] = SlotRecord::Participant(ParticipantId(2));
        table
    }

    #[test]
    fn test_record_projections() {
        let record = SlotRecord::Commanding {
            participant: ParticipantId(0),
            squad_member: SquadMemberId(0),
        };
        assert_eq!(record.participant(), Some(ParticipantId(0)));
        assert_eq!(record.squad_member(), Some(SquadMemberId(0)));
        assert!(record.is_occupied());

        assert_eq!(SlotRecord::Participant(ParticipantId(4)).squad_member(), None);
        assert!(!SlotRecord::Empty.is_occupied());
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = SlotTable::new(4);
        assert_eq!(table.len(), 4);
        assert_eq!(table.occupied_count(), 0);
        assert_eq!(table.mode(), AssignmentMode::Fallback);
    }

    #[test]
    fn test_queries() {
        let table = networked_table();
        assert_eq!(table.slot_to_squad_member_index(1), Some(SquadMemberId(5)));
        assert_eq!(table.slot_to_squad_member_index(2), None);
        assert_eq!(table.slot_to_squad_member_index(4), None);
        assert!(table.is_slot_occupied(2));
        assert!(!table.is_slot_occupied(3));
        assert_eq!(table.occupying_participant(2), Some(ParticipantId(2)));
        assert_eq!(table.occupied_count(), 3);
    }

    #[test]
    fn test_is_slot_local() {
        let table = networked_table();
        assert!(table.is_slot_local(0));
        assert!(table.is_slot_local(1));
        assert!(!table.is_slot_local(2));
        assert!(!table.is_slot_local(3));
        assert!(!table.is_slot_local(4));
    }

    #[test]
    fn test_offline_rows_are_local() {
        let mut table = SlotTable::new(2);
        table.clear(AssignmentMode::Offline, Some(ParticipantId(0)));
        assert!(table.is_slot_local(1));
        assert!(!table.is_slot_local(2));
    }

    #[test]
    fn test_reverse_lookups() {
        let table = networked_table();
        assert_eq!(table.slot_of_squad_member(SquadMemberId(5)), Some(1));
        assert_eq!(table.slot_of_squad_member(SquadMemberId(9)), None);
        assert_eq!(table.first_slot_of_participant(ParticipantId(1)), Some(0));
        assert_eq!(table.first_slot_of_participant(ParticipantId(2)), Some(2));
    }

    #[test]
    fn test_copy_from_resizes() {
        let source = networked_table();
        let mut target = SlotTable::new(2);
        target.copy_from(&source);
        assert_eq!(target, source);

        let mut same_size = SlotTable::new(4);
        same_size.copy_from(&source);
        assert_eq!(same_size, source);
    }
}
