//! # Slot Assignment Scenarios
//!
//! Literal roster layouts the briefing screen depends on.
//!
//! Run with: cargo test -p muster_core --test slot_assignment_scenarios

use muster_core::{AssignmentMode, Briefing, ParticipantTable, SlotRecord, SquadTable};
use muster_shared::{ParticipantId, RosterConfig, SquadMemberId, SLOT_NONE};

fn commanding(participant: ParticipantId, member: u32) -> SlotRecord {
    SlotRecord::Commanding {
        participant,
        squad_member: SquadMemberId(member),
    }
}

// ============================================================================
// OFFLINE
// ============================================================================

#[test]
fn offline_registry_index_is_slot_index() {
    let mut participants = ParticipantTable::new(4);
    let local = participants.connect("me", true).unwrap();
    let mut squad = SquadTable::new(8);
    squad.spawn_at(SquadMemberId(0), "zero");
    squad.spawn_at(SquadMemberId(2), "two");

    let mut briefing = Briefing::new(RosterConfig::with_slots(4), participants, squad);
    briefing.recompute_if_stale(1);

    assert_eq!(
        briefing.table().records(),
        &[
            commanding(local, 0),
            SlotRecord::Empty,
            commanding(local, 2),
            SlotRecord::Empty,
        ]
    );
    assert_eq!(briefing.table().mode(), AssignmentMode::Offline);
}

#[test]
fn offline_empty_registry_keeps_local_in_slot_zero() {
    let mut participants = ParticipantTable::new(4);
    let local = participants.connect("me", true).unwrap();
    let squad = SquadTable::new(0);
    let mut briefing = Briefing::new(RosterConfig::default(), participants, squad);

    assert_eq!(briefing.occupying_participant(1, 0), Some(local));
    assert_eq!(briefing.slot_to_squad_member_index(1, 0), None);
    for slot in 1..4 {
        assert!(!briefing.is_slot_occupied(1, slot));
        assert!(briefing.is_slot_local(1, slot));
    }
}

#[test]
fn offline_wide_roster_shows_every_registry_index() {
    let mut participants = ParticipantTable::new(4);
    let local = participants.connect("me", true).unwrap();
    let mut squad = SquadTable::new(12);
    for _ in 0..12 {
        squad.spawn("m");
    }

    let mut briefing = Briefing::new(RosterConfig::with_slots(12), participants, squad);
    let view = briefing.view(1);
    for slot in 0..12 {
        assert_eq!(
            view.slot_to_squad_member_index(slot),
            SquadMemberId::from_index(slot)
        );
        assert_eq!(view.occupying_participant(slot), Some(local));
    }
    assert_eq!(briefing.stats().dropped, 0);
}

// ============================================================================
// NETWORKED
// ============================================================================

#[test]
fn networked_tiers_fill_in_order() {
    let mut participants = ParticipantTable::networked(8);
    let local = participants.connect("me", true).unwrap();
    let p2 = ParticipantId(2);
    let p3 = ParticipantId(3);
    participants.connect_at(p2, "two", false);
    participants.connect_at(p3, "three", false);

    let mut squad = SquadTable::new(8);
    for (index, commander) in [(5, local), (3, local), (7, p2)] {
        let member = squad.spawn_at(SquadMemberId(index), "m").unwrap();
        squad.assign(member, Some(commander));
    }

    let mut briefing = Briefing::new(RosterConfig::with_slots(4), participants, squad);
    briefing.recompute_if_stale(1);

    assert_eq!(
        briefing.table().records(),
        &[
            commanding(local, 3),
            commanding(local, 5),
            commanding(p2, 7),
            SlotRecord::Participant(p3),
        ]
    );
    assert!(briefing.is_slot_local(1, 1));
    assert!(!briefing.is_slot_local(1, 2));
}

#[test]
fn networked_capacity_leaves_late_participants_out() {
    let mut participants = ParticipantTable::networked(8);
    let local = participants.connect("me", true).unwrap();
    let others: Vec<_> = (0..5)
        .map(|_| participants.connect("other", false).unwrap())
        .collect();

    let mut squad = SquadTable::new(8);
    let member = squad.spawn_at(SquadMemberId(0), "m").unwrap();
    squad.assign(member, Some(local));

    let mut briefing = Briefing::new(RosterConfig::with_slots(4), participants, squad);
    briefing.recompute_if_stale(1);

    assert_eq!(
        briefing.table().records(),
        &[
            commanding(local, 0),
            SlotRecord::Participant(others[0]),
            SlotRecord::Participant(others[1]),
            SlotRecord::Participant(others[2]),
        ]
    );
    assert_eq!(briefing.stats().dropped, 2);
}

#[test]
fn networked_local_without_squad_still_holds_slot_zero() {
    let mut participants = ParticipantTable::networked(4);
    let remote = participants.connect("remote", false).unwrap();
    let local = participants.connect("me", true).unwrap();

    let mut squad = SquadTable::new(4);
    let member = squad.spawn("m").unwrap();
    squad.assign(member, Some(remote));

    let mut briefing = Briefing::new(RosterConfig::default(), participants, squad);
    briefing.recompute_if_stale(1);

    assert_eq!(briefing.table().get(0), Some(SlotRecord::Participant(local)));
    assert_eq!(briefing.table().get(1), Some(commanding(remote, 0)));
}

#[test]
fn networked_uncommanded_members_are_not_placed() {
    let mut participants = ParticipantTable::networked(4);
    let local = participants.connect("me", true).unwrap();
    let mut squad = SquadTable::new(4);
    squad.spawn("loose");

    let mut briefing = Briefing::new(RosterConfig::default(), participants, squad);
    briefing.recompute_if_stale(1);

    assert_eq!(briefing.table().records()[0], SlotRecord::Participant(local));
    assert_eq!(briefing.table().occupied_count(), 1);
}

// ============================================================================
// SENTINELS AND DEGRADED COLLABORATORS
// ============================================================================

#[test]
fn out_of_range_slot_is_none() {
    let mut participants = ParticipantTable::networked(4);
    participants.connect("me", true);
    let squad = SquadTable::new(4);
    let mut briefing = Briefing::new(RosterConfig::with_slots(4), participants, squad);

    assert_eq!(briefing.slot_to_squad_member_index(1, 4), None);
    assert_eq!(briefing.view(1).slot_to_squad_member_raw(4), SLOT_NONE);
    assert!(!briefing.is_slot_occupied(1, 4));
    assert!(!briefing.is_slot_local(1, 4));
    assert_eq!(briefing.occupying_participant(1, 4), None);
}

#[test]
fn unavailable_collaborators_degrade() {
    let mut participants = ParticipantTable::networked(4);
    let local = participants.connect("me", true).unwrap();
    participants.connect("remote", false);
    let mut squad = SquadTable::new(4);
    let member = squad.spawn("m").unwrap();
    squad.assign(member, Some(local));

    let mut briefing = Briefing::new(RosterConfig::default(), participants, squad);

    briefing.registry_mut().set_available(false);
    let view = briefing.view(1);
    assert_eq!(view.occupying_participant(0), Some(local));
    assert_eq!(view.slot_to_squad_member_index(0), None);
    assert_eq!(view.occupied_count(), 1);

    briefing.directory_mut().set_available(false);
    let view = briefing.view(2);
    assert_eq!(view.occupying_participant(0), Some(local));
    assert_eq!(view.slot_to_squad_member_index(0), None);
    assert_eq!(view.occupied_count(), 1);

    briefing.directory_mut().set_available(true);
    briefing.registry_mut().set_available(true);
    assert_eq!(briefing.view(3).occupied_count(), 2);
}

#[test]
fn disconnect_mid_session_frees_rows() {
    let mut participants = ParticipantTable::networked(4);
    let local = participants.connect("me", true).unwrap();
    let remote = participants.connect("remote", false).unwrap();
    let mut squad = SquadTable::new(4);
    let member = squad.spawn("m").unwrap();
    squad.assign(member, Some(remote));

    let mut briefing = Briefing::new(RosterConfig::default(), participants, squad);
    assert_eq!(briefing.occupying_participant(1, 1), Some(remote));

    briefing.directory_mut().disconnect(remote);
    briefing.registry_mut().release_commanded_by(remote);

    let view = briefing.view(2);
    assert_eq!(view.occupied_count(), 1);
    assert_eq!(view.first_slot_of_participant(remote), None);
    assert_eq!(view.occupying_participant(0), Some(local));
}
