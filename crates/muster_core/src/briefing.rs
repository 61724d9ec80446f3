//! # Briefing Service
//!
//! The roster service handed to every briefing panel. The host builds one at
//! startup and passes it by reference; there is no global instance.
//!
//! ## Usage
//!
//! ```rust
//! use muster_core::{Briefing, ParticipantTable, SquadTable};
//! use muster_shared::RosterConfig;
//!
//! let mut participants = ParticipantTable::networked(8);
//! participants.connect("me", true);
//! let mut briefing = Briefing::new(RosterConfig::default(), participants, SquadTable::new(8));
//!
//! for tick in 1..=3 {
//!     // Any number of panels may query; the table is rebuilt once per tick
//!     let view = briefing.view(tick);
//!     assert!(view.is_slot_local(0));
//!     assert!(briefing.is_slot_occupied(tick, 0));
//! }
//! assert_eq!(briefing.stats().recomputes, 3);
//! ```

use muster_shared::{ParticipantId, RosterConfig, SquadMemberId, Tick};

use crate::directory::{ParticipantDirectory, SquadRegistry};
use crate::slot::{RecomputeStats, SlotEngine, SlotTable, SlotView};
use crate::sync::DoubleBufferedTable;

/// Slot engine bundled with the collaborators it reads.
///
/// Changes made through [`Briefing::directory_mut`] or
/// [`Briefing::registry_mut`] show up at the next tick. Call
/// [`Briefing::invalidate`] to see them within the current one.
pub struct Briefing<D, R> {
    engine: SlotEngine,
    directory: D,
    registry: R,
}

impl<D, R> Briefing<D, R>
where
    D: ParticipantDirectory,
    R: SquadRegistry,
{
    /// Creates the service. Nothing is computed until the first query.
    #[must_use]
    pub fn new(config: RosterConfig, directory: D, registry: R) -> Self {
        Self {
            engine: SlotEngine::new(config),
            directory,
            registry,
        }
    }

    /// Rebuilds the slot table unless it is already current for `tick`.
    pub fn recompute_if_stale(&mut self, tick: Tick) -> bool {
        self.engine
            .recompute_if_stale(tick, &self.directory, &self.registry)
    }

    /// Brings the table up to `tick` and returns a view over it.
    pub fn view(&mut self, tick: Tick) -> SlotView<'_, D, R> {
        self.recompute_if_stale(tick);
        SlotView::new(self.engine.table(), &self.directory, &self.registry)
    }

    /// Squad-member in `slot` at `tick`.
    pub fn slot_to_squad_member_index(&mut self, tick: Tick, slot: usize) -> Option<SquadMemberId> {
        self.view(tick).slot_to_squad_member_index(slot)
    }

    /// Whether `slot` holds anyone at `tick`.
    pub fn is_slot_occupied(&mut self, tick: Tick, slot: usize) -> bool {
        self.view(tick).is_slot_occupied(slot)
    }

    /// Whether `slot` belongs to the local participant at `tick`.
    pub fn is_slot_local(&mut self, tick: Tick, slot: usize) -> bool {
        self.view(tick).is_slot_local(slot)
    }

    /// Participant in `slot` at `tick`.
    pub fn occupying_participant(&mut self, tick: Tick, slot: usize) -> Option<ParticipantId> {
        self.view(tick).occupying_participant(slot)
    }

    /// Forces a rebuild on the next query, even within the same tick.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
    }

    /// Publishes the current table for readers on other threads.
    pub fn publish_to(&self, target: &DoubleBufferedTable) -> bool {
        self.engine.publish_to(target)
    }

    /// Table from the last recompute, without recomputing.
    #[must_use]
    pub fn table(&self) -> &SlotTable {
        self.engine.table()
    }

    /// Recompute bookkeeping.
    #[must_use]
    pub fn stats(&self) -> RecomputeStats {
        self.engine.stats()
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &RosterConfig {
        self.engine.config()
    }

    /// The participant directory.
    #[must_use]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Mutable access to the participant directory.
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// The squad registry.
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the squad registry.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }
}
