//! # Briefing Roster Simulation
//!
//! Drives a scripted lobby through joins, leaves and squad hand-offs and
//! prints the briefing roster after every tick.
//!
//! Usage: `briefing_sim [path/to/roster.toml]` (defaults to `data/roster.toml`).

use muster_core::{Briefing, ParticipantTable, SquadTable};
use muster_shared::{ConfigError, ConfigResult, ParticipantId, RosterConfig, SquadMemberId};

type LobbyBriefing = Briefing<ParticipantTable, SquadTable>;

/// Loads the roster config, falling back to defaults when the file is missing.
fn load_config(path: &str) -> ConfigResult<RosterConfig> {
    match RosterConfig::from_file(path) {
        Ok(config) => {
            println!("Loaded {path} ({} slots)", config.num_slots);
            Ok(config)
        }
        Err(ConfigError::Io { .. }) => {
            println!("No config at {path}, using defaults");
            Ok(RosterConfig::default())
        }
        Err(err) => Err(err),
    }
}

fn print_roster(briefing: &mut LobbyBriefing, tick: u64, title: &str) {
    let view = briefing.view(tick);

    println!("┌─ TICK {tick:>3} ─ {title:<50} ┐");
    for slot in 0..view.num_slots() {
        if !view.is_slot_occupied(slot) {
            println!("│ slot {slot}  {:<58} │", "-- unoccupied --");
            continue;
        }

        let member = view
            .slot_to_squad_member_index(slot)
            .map_or_else(|| "none".to_string(), |m| m.to_string());
        let participant = view
            .occupying_participant(slot)
            .map_or_else(|| "none".to_string(), |p| p.to_string());
        let name = view.display_name(slot).unwrap_or("?");

        let mut flags = String::new();
        if view.is_slot_local(slot) {
            flags.push_str(" local");
        }
        if view.is_slot_leader(slot) {
            flags.push_str(" leader");
        }
        if view.is_slot_ready(slot) {
            flags.push_str(" ready");
        }
        if view.is_slot_bot(slot) {
            flags.push_str(" bot");
        }

        let row = format!("{participant:<4} {member:<5} {name:<12}{flags}");
        println!("│ slot {slot}  {row:<58} │");
    }
    println!("└{:─<66}┘", "");

    let stats = briefing.stats();
    if stats.dropped > 0 {
        println!("  ({} entries did not fit the roster)", stats.dropped);
    }
    println!();
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║              MUSTER - BRIEFING ROSTER SIMULATION                 ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/roster.toml".to_string());
    let config = match load_config(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let participant_capacity = config.max_participants;
    let squad_capacity = config.max_squad_members;

    let mut participants = ParticipantTable::new(participant_capacity);
    let Some(local) = participants.connect("Sarge", true) else {
        eprintln!("Error: participant table has no room for the local player");
        std::process::exit(1);
    };
    participants.set_leader(Some(local));

    let mut squad = SquadTable::new(squad_capacity);
    squad.spawn_at(SquadMemberId(0), "Wildcat");
    squad.spawn_at(SquadMemberId(2), "Faith");

    let mut briefing = Briefing::new(config, participants, squad);
    let mut tick = 1;

    // Offline: registry index is slot index
    print_roster(&mut briefing, tick, "offline, members at 0 and 2");

    // Go networked and hand out squads
    tick += 1;
    {
        let directory = briefing.directory_mut();
        directory.set_networked(true);
        directory.connect_at(ParticipantId(2), "Jaeger", false);
        directory.connect_at(ParticipantId(3), "Crash", false);
        directory.set_ready(ParticipantId(2), true);
    }
    {
        let registry = briefing.registry_mut();
        registry.despawn(SquadMemberId(0));
        registry.despawn(SquadMemberId(2));
        for (index, name, commander) in [
            (3, "Bastille", local),
            (5, "Vegas", local),
            (7, "Wolfe", ParticipantId(2)),
        ] {
            if let Some(member) = registry.spawn_at(SquadMemberId(index), name) {
                registry.assign(member, Some(commander));
            }
        }
    }
    briefing.directory_mut().set_controlling(local, Some(SquadMemberId(3)));
    print_roster(&mut briefing, tick, "networked, two remote players");

    // Jaeger leaves; Wolfe goes back to the pool
    tick += 1;
    briefing.directory_mut().disconnect(ParticipantId(2));
    briefing.registry_mut().release_commanded_by(ParticipantId(2));
    print_roster(&mut briefing, tick, "Jaeger disconnected");

    // Lobby floods past the roster size
    tick += 1;
    for name in ["Sarge2", "Jaeger2", "Wildcat2", "Faith2", "Wolfe2"] {
        briefing.directory_mut().connect(name, false);
    }
    print_roster(&mut briefing, tick, "five more players join");

    let stats = briefing.stats();
    println!("Recomputes: {} over {} ticks", stats.recomputes, tick);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_roster_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/roster.toml");
        let config = load_config(path).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_config("/nonexistent/roster.toml").unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let path = std::env::temp_dir().join("briefing_sim_invalid_roster.toml");
        std::fs::write(&path, "num_slots = 0\n").unwrap();
        let result = load_config(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::ZeroSlots)));
    }
}
