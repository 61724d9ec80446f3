//! Squad-members, one entry per registry index.

use muster_shared::{ParticipantId, SquadMemberId};

use crate::directory::SquadRegistry;

/// One registry slot of the squad table.
#[derive(Clone, Debug, Default)]
pub struct SquadEntry {
    /// Slot holds a squad-member.
    pub present: bool,
    /// Participant commanding it.
    pub commander: Option<ParticipantId>,
    /// Name shown in the roster.
    pub name: String,
}

/// Squad registry backed by a fixed array of unit slots.
#[derive(Clone, Debug)]
pub struct SquadTable {
    /// Unit slots.
    entries: Box<[SquadEntry]>,
    /// Registry can be queried.
    available: bool,
}

impl SquadTable {
    /// Creates an empty, available table with `capacity` unit slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let entries: Vec<SquadEntry> = (0..capacity).map(|_| SquadEntry::default()).collect();

        Self {
            entries: entries.into_boxed_slice(),
            available: true,
        }
    }

    /// Spawns an uncommanded squad-member at the first free index.
    pub fn spawn(&mut self, name: &str) -> Option<SquadMemberId> {
        let index = self.entries.iter().position(|e| !e.present)?;
        let id = SquadMemberId::from_index(index)?;
        self.spawn_at(id, name)
    }

    /// Spawns an uncommanded squad-member at a specific index.
    ///
    /// Returns `None` if the index is out of range or taken.
    pub fn spawn_at(&mut self, id: SquadMemberId, name: &str) -> Option<SquadMemberId> {
        let entry = self.entries.get_mut(id.index())?;
        if entry.present {
            return None;
        }

        entry.present = true;
        entry.commander = None;
        entry.name.clear();
        entry.name.push_str(name);
        Some(id)
    }

    /// Removes a squad-member. Unknown ids are ignored.
    pub fn despawn(&mut self, id: SquadMemberId) {
        if let Some(entry) = self.entries.get_mut(id.index()) {
            entry.present = false;
            entry.commander = None;
            entry.name.clear();
        }
    }

    /// Hands a squad-member to a participant, or releases it with `None`.
    ///
    /// Returns false if the squad-member does not exist.
    pub fn assign(&mut self, id: SquadMemberId, commander: Option<ParticipantId>) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        entry.commander = commander;
        true
    }

    /// Releases every squad-member commanded by `participant`.
    ///
    /// Returns how many were released.
    pub fn release_commanded_by(&mut self, participant: ParticipantId) -> usize {
        let mut released = 0;
        for entry in self.entries.iter_mut().filter(|e| e.present) {
            if entry.commander == Some(participant) {
                entry.commander = None;
                released += 1;
            }
        }
        released
    }

    /// Squad-members commanded by `participant`, ascending.
    pub fn commanded_by(
        &self,
        participant: ParticipantId,
    ) -> impl Iterator<Item = SquadMemberId> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.present && e.commander == Some(participant))
            .filter_map(|(i, _)| SquadMemberId::from_index(i))
    }

    /// Number of present squad-members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    /// True if no squad-member is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry for a present squad-member.
    #[must_use]
    pub fn get(&self, id: SquadMemberId) -> Option<&SquadEntry> {
        self.entries.get(id.index()).filter(|e| e.present)
    }

    fn get_mut(&mut self, id: SquadMemberId) -> Option<&mut SquadEntry> {
        self.entries.get_mut(id.index()).filter(|e| e.present)
    }

    /// Marks the registry as (un)available.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl SquadRegistry for SquadTable {
    fn is_available(&self) -> bool {
        self.available
    }

    fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn exists(&self, id: SquadMemberId) -> bool {
        self.get(id).is_some()
    }

    fn commanding_participant(&self, id: SquadMemberId) -> Option<ParticipantId> {
        self.get(id).and_then(|e| e.commander)
    }

    fn display_name(&self, id: SquadMemberId) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }
}
