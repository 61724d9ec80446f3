//! # Slot Engine Benchmark
//!
//! Measures:
//! 1. A full recompute (new tick every iteration)
//! 2. A cached query (same tick, table already current)
//!
//! Briefing panels query the roster many times per frame; only the first
//! query of a tick should pay for placement.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use muster_core::{Briefing, ParticipantTable, SlotEngine, SquadTable};
use muster_shared::{ParticipantId, RosterConfig, SquadMemberId};

/// Full lobby: every participant commands one squad-member.
fn full_lobby(players: usize) -> (ParticipantTable, SquadTable) {
    let mut participants = ParticipantTable::networked(players);
    let mut squad = SquadTable::new(players);
    for i in 0..players {
        let Some(id) = participants.connect("player", i == 0) else {
            break;
        };
        if let Some(member) = squad.spawn("member") {
            squad.assign(member, Some(id));
        }
    }
    (participants, squad)
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("slot_engine_recompute");

    for players in [4usize, 16, 32] {
        let (participants, squad) = full_lobby(players);
        let config = RosterConfig {
            max_participants: players,
            max_squad_members: players,
            ..RosterConfig::default()
        };
        let mut engine = SlotEngine::new(config);
        let mut tick = 0u64;

        group.bench_with_input(BenchmarkId::new("networked", players), &players, |b, _| {
            b.iter(|| {
                tick += 1;
                engine.recompute_if_stale(black_box(tick), &participants, &squad)
            });
        });
    }

    group.finish();
}

fn bench_cached_query(c: &mut Criterion) {
    let (participants, squad) = full_lobby(32);
    let config = RosterConfig {
        max_participants: 32,
        max_squad_members: 32,
        ..RosterConfig::default()
    };
    let mut briefing = Briefing::new(config, participants, squad);

    c.bench_function("slot_engine_cached_query", |b| {
        b.iter(|| {
            let view = briefing.view(black_box(1));
            (
                view.slot_to_squad_member_index(black_box(2)),
                view.slot_of_squad_member(SquadMemberId(3)),
                view.first_slot_of_participant(ParticipantId(1)),
            )
        });
    });
}

criterion_group!(benches, bench_recompute, bench_cached_query);
criterion_main!(benches);
