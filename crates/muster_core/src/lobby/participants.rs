//! Connected participants, one entry per connection index.

use muster_shared::{ParticipantId, SquadMemberId};

use crate::directory::ParticipantDirectory;

/// One connection slot of the participant table.
#[derive(Clone, Debug, Default)]
pub struct ParticipantEntry {
    /// Slot is in use.
    pub connected: bool,
    /// Participant is the one running this client.
    pub local: bool,
    /// Participant has readied up.
    pub ready: bool,
    /// Squad-member being driven right now.
    pub controlling: Option<SquadMemberId>,
    /// Name shown in the roster.
    pub name: String,
}

impl ParticipantEntry {
    fn reset(&mut self) {
        self.connected = false;
        self.local = false;
        self.ready = false;
        self.controlling = None;
        self.name.clear();
    }
}

/// Participant directory backed by a fixed array of connection slots.
#[derive(Clone, Debug)]
pub struct ParticipantTable {
    /// Connection slots.
    entries: Box<[ParticipantEntry]>,
    /// Number of connected entries.
    connected: usize,
    /// Session is networked.
    networked: bool,
    /// Directory can be queried.
    available: bool,
    /// Lobby leader.
    leader: Option<ParticipantId>,
}

impl ParticipantTable {
    /// Creates an offline, available table with `capacity` connection slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let entries: Vec<ParticipantEntry> = (0..capacity)
            .map(|_| ParticipantEntry::default())
            .collect();

        Self {
            entries: entries.into_boxed_slice(),
            connected: 0,
            networked: false,
            available: true,
            leader: None,
        }
    }

    /// Creates a networked table.
    #[must_use]
    pub fn networked(capacity: usize) -> Self {
        let mut table = Self::new(capacity);
        table.networked = true;
        table
    }

    /// Connects a participant at the first free index.
    ///
    /// Returns `None` if every slot is taken.
    pub fn connect(&mut self, name: &str, local: bool) -> Option<ParticipantId> {
        let index = self.entries.iter().position(|e| !e.connected)?;
        let id = ParticipantId::from_index(index)?;
        self.connect_at(id, name, local).then_some(id)
    }

    /// Connects a participant at a specific index.
    ///
    /// Returns false if the index is out of range or already connected.
    pub fn connect_at(&mut self, id: ParticipantId, name: &str, local: bool) -> bool {
        let Some(entry) = self.entries.get_mut(id.index()) else {
            return false;
        };
        if entry.connected {
            return false;
        }

        entry.reset();
        entry.connected = true;
        entry.local = local;
        entry.name.push_str(name);
        self.connected += 1;
        true
    }

    /// Disconnects a participant. Unknown or already free ids are ignored.
    ///
    /// Squad-members it commanded are not touched; see
    /// [`crate::SquadTable::release_commanded_by`].
    pub fn disconnect(&mut self, id: ParticipantId) {
        let Some(entry) = self.entries.get_mut(id.index()) else {
            return;
        };
        if !entry.connected {
            return;
        }

        entry.reset();
        self.connected -= 1;
        if self.leader == Some(id) {
            self.leader = None;
        }
    }

    /// Number of connected participants.
    #[inline]
    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.connected
    }

    /// Connected participant ids in ascending order.
    pub fn iter_connected(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.connected)
            .filter_map(|(i, _)| ParticipantId::from_index(i))
    }

    /// Entry for a connected participant.
    #[must_use]
    pub fn get(&self, id: ParticipantId) -> Option<&ParticipantEntry> {
        self.entries.get(id.index()).filter(|e| e.connected)
    }

    fn get_mut(&mut self, id: ParticipantId) -> Option<&mut ParticipantEntry> {
        self.entries.get_mut(id.index()).filter(|e| e.connected)
    }

    /// Switches between offline and networked mode.
    pub fn set_networked(&mut self, networked: bool) {
        self.networked = networked;
    }

    /// Marks the directory as (un)available.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Sets the lobby leader. Ids that are not connected clear it.
    pub fn set_leader(&mut self, id: Option<ParticipantId>) {
        self.leader = id.filter(|&id| self.get(id).is_some());
    }

    /// Sets a participant's ready flag. Returns false for unknown ids.
    pub fn set_ready(&mut self, id: ParticipantId, ready: bool) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        entry.ready = ready;
        true
    }

    /// Sets the squad-member a participant is driving. Returns false for
    /// unknown ids.
    pub fn set_controlling(&mut self, id: ParticipantId, member: Option<SquadMemberId>) -> bool {
        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        entry.controlling = member;
        true
    }
}

impl ParticipantDirectory for ParticipantTable {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_networked(&self) -> bool {
        self.networked
    }

    fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn is_connected(&self, id: ParticipantId) -> bool {
        self.get(id).is_some()
    }

    fn is_local(&self, id: ParticipantId) -> bool {
        self.get(id).is_some_and(|e| e.local)
    }

    fn controlling(&self, id: ParticipantId) -> Option<SquadMemberId> {
        self.get(id).and_then(|e| e.controlling)
    }

    fn display_name(&self, id: ParticipantId) -> Option<&str> {
        self.get(id).map(|e| e.name.as_str())
    }

    fn leader(&self) -> Option<ParticipantId> {
        self.leader
    }

    fn is_ready(&self, id: ParticipantId) -> bool {
        self.get(id).is_some_and(|e| e.ready)
    }
}
