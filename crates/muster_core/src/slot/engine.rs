//! # Slot Assignment Engine
//!
//! Rebuilds the slot table from the directory and registry, at most once
//! per tick.
//!
//! ## Ordering
//!
//! Participants are scanned by ascending connection index and squad-members
//! by ascending registry index. Nothing else breaks ties, so the same lobby
//! state always produces the same table.

use muster_shared::{ParticipantId, RosterConfig, SquadMemberId, Tick, MAX_SLOTS};

use super::{AssignmentMode, SlotRecord, SlotTable};
use crate::directory::{ParticipantDirectory, SquadRegistry};
use crate::sync::DoubleBufferedTable;

/// Recompute bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    /// Number of times the placement algorithm has run.
    pub recomputes: u64,
    /// Tick of the last recompute.
    pub last_tick: Option<Tick>,
    /// Candidates left out of the last table for lack of rows.
    pub dropped: usize,
}

/// Owns the slot table and rebuilds it once per tick.
#[derive(Clone, Debug)]
pub struct SlotEngine {
    config: RosterConfig,
    table: SlotTable,
    stats: RecomputeStats,
}

impl SlotEngine {
    /// Creates an engine with an empty table.
    ///
    /// `num_slots` is clamped to [`MAX_SLOTS`]; run
    /// [`RosterConfig::validate`] first to reject bad files instead.
    #[must_use]
    pub fn new(mut config: RosterConfig) -> Self {
        config.num_slots = config.num_slots.min(MAX_SLOTS);
        Self {
            table: SlotTable::new(config.num_slots),
            config,
            stats: RecomputeStats::default(),
        }
    }

    /// Engine configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// The table from the last recompute.
    #[inline]
    #[must_use]
    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    /// Recompute bookkeeping.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> RecomputeStats {
        self.stats
    }

    /// Rebuilds the table unless it was already rebuilt at `tick`.
    ///
    /// Returns true if the placement algorithm ran.
    pub fn recompute_if_stale<D, R>(&mut self, tick: Tick, directory: &D, registry: &R) -> bool
    where
        D: ParticipantDirectory + ?Sized,
        R: SquadRegistry + ?Sized,
    {
        if self.stats.last_tick == Some(tick) {
            return false;
        }

        self.stats.dropped = self.recompute(directory, registry);
        self.stats.recomputes += 1;
        self.stats.last_tick = Some(tick);

        tracing::trace!(
            tick,
            mode = ?self.table.mode(),
            occupied = self.table.occupied_count(),
            "slot table recomputed"
        );
        if self.stats.dropped > 0 {
            tracing::debug!(
                tick,
                dropped = self.stats.dropped,
                slots = self.table.len(),
                "roster full, entries left out"
            );
        }
        true
    }

    /// Forces the next [`SlotEngine::recompute_if_stale`] to rebuild even if
    /// it is for the same tick.
    pub fn invalidate(&mut self) {
        self.stats.last_tick = None;
    }

    /// Copies the current table into `target` and publishes it.
    ///
    /// Returns false, publishing nothing, if no recompute has happened yet.
    pub fn publish_to(&self, target: &DoubleBufferedTable) -> bool {
        let Some(tick) = self.stats.last_tick else {
            return false;
        };
        let mut write = target.write_handle();
        write.copy_from(&self.table);
        write.publish(tick);
        true
    }

    /// Runs the placement algorithm. Returns the number of dropped candidates.
    fn recompute<D, R>(&mut self, directory: &D, registry: &R) -> usize
    where
        D: ParticipantDirectory + ?Sized,
        R: SquadRegistry + ?Sized,
    {
        let Some(local) = directory
            .local_participant()
            .filter(|&id| directory.is_connected(id))
        else {
            self.table.clear(AssignmentMode::Fallback, None);
            return 0;
        };

        if !directory.is_available() || !registry.is_available() {
            tracing::trace!(
                directory = directory.is_available(),
                registry = registry.is_available(),
                "collaborator unavailable, roster holds local participant only"
            );
            self.table.clear(AssignmentMode::Fallback, Some(local));
            if let Some(first) = self.table.records_mut().first_mut() {
                *first = SlotRecord::Participant(local);
            }
            return 0;
        }

        let bounds = Bounds {
            participants: directory.capacity().min(self.config.max_participants),
            squad_members: registry.capacity().min(self.config.max_squad_members),
        };

        if directory.is_networked() {
            self.table.clear(AssignmentMode::Networked, Some(local));
            assign_networked(
                self.table.records_mut(),
                local,
                bounds,
                directory,
                registry,
            )
        } else {
            self.table.clear(AssignmentMode::Offline, Some(local));
            // Every row must be able to show its own registry index
            let bounds = Bounds {
                squad_members: registry
                    .capacity()
                    .min(bounds.squad_members.max(self.table.len())),
                ..bounds
            };
            assign_offline(self.table.records_mut(), local, bounds, registry)
        }
    }
}

/// Enumeration limits for one recompute.
#[derive(Clone, Copy)]
struct Bounds {
    participants: usize,
    squad_members: usize,
}

/// Fills rows front to back and counts what did not fit.
struct Placer<'a> {
    rows: &'a mut [SlotRecord],
    filled: usize,
    dropped: usize,
}

impl<'a> Placer<'a> {
    fn new(rows: &'a mut [SlotRecord]) -> Self {
        Self {
            rows,
            filled: 0,
            dropped: 0,
        }
    }

    fn place(&mut self, record: SlotRecord) {
        if self.filled == self.rows.len() {
            self.dropped += 1;
            return;
        }
        self.rows[self.filled] = record;
        self.filled += 1;
    }

    /// Linear scan of filled rows; `num_slots` is small.
    fn holds_squad_member(&self, member: SquadMemberId) -> bool {
        self.rows[..self.filled]
            .iter()
            .any(|r| r.squad_member() == Some(member))
    }

    fn holds_participant(&self, participant: ParticipantId) -> bool {
        self.rows[..self.filled]
            .iter()
            .any(|r| r.participant() == Some(participant))
    }
}

fn squad_members<R>(registry: &R, bound: usize) -> impl Iterator<Item = SquadMemberId> + '_
where
    R: SquadRegistry + ?Sized,
{
    (0..bound)
        .filter_map(SquadMemberId::from_index)
        .filter(move |&id| registry.exists(id))
}

fn commanded_by<R>(
    registry: &R,
    bound: usize,
    participant: ParticipantId,
) -> impl Iterator<Item = SquadMemberId> + '_
where
    R: SquadRegistry + ?Sized,
{
    squad_members(registry, bound)
        .filter(move |&id| registry.commanding_participant(id) == Some(participant))
}

/// Registry index doubles as slot index. Slot 0 always holds the local
/// participant.
fn assign_offline<R>(
    rows: &mut [SlotRecord],
    local: ParticipantId,
    bounds: Bounds,
    registry: &R,
) -> usize
where
    R: SquadRegistry + ?Sized,
{
    for (slot, row) in rows.iter_mut().enumerate() {
        let member = SquadMemberId::from_index(slot)
            .filter(|&id| slot < bounds.squad_members && registry.exists(id));
        *row = match member {
            Some(squad_member) => SlotRecord::Commanding {
                participant: local,
                squad_member,
            },
            None if slot == 0 => SlotRecord::Participant(local),
            None => SlotRecord::Empty,
        };
    }

    squad_members(registry, bounds.squad_members)
        .filter(|id| id.index() >= rows.len())
        .count()
}

/// Slot 0 for the local participant, then tiers A, B and C.
fn assign_networked<D, R>(
    rows: &mut [SlotRecord],
    local: ParticipantId,
    bounds: Bounds,
    directory: &D,
    registry: &R,
) -> usize
where
    D: ParticipantDirectory + ?Sized,
    R: SquadRegistry + ?Sized,
{
    let mut placer = Placer::new(rows);

    // Slot 0: local participant with its lowest-index squad-member
    let first = commanded_by(registry, bounds.squad_members, local).next();
    placer.place(match first {
        Some(squad_member) => SlotRecord::Commanding {
            participant: local,
            squad_member,
        },
        None => SlotRecord::Participant(local),
    });

    // Tier A: the rest of the local participant's squad
    for member in commanded_by(registry, bounds.squad_members, local) {
        if !placer.holds_squad_member(member) {
            placer.place(SlotRecord::Commanding {
                participant: local,
                squad_member: member,
            });
        }
    }

    // Any other local participant (split screen) is placed like a remote one
    let others = || {
        (0..bounds.participants)
            .filter_map(ParticipantId::from_index)
            .filter(move |&id| id != local && directory.is_connected(id))
    };

    // Tier B: other participants' squad-members
    for participant in others() {
        for member in commanded_by(registry, bounds.squad_members, participant) {
            if !placer.holds_squad_member(member) {
                placer.place(SlotRecord::Commanding {
                    participant,
                    squad_member: member,
                });
            }
        }
    }

    // Tier C: other participants commanding nothing
    for participant in others() {
        let commands_any = commanded_by(registry, bounds.squad_members, participant)
            .next()
            .is_some();
        if placer.holds_participant(participant) || commands_any {
            continue;
        }
        placer.place(SlotRecord::Participant(participant));
    }

    placer.dropped
}
