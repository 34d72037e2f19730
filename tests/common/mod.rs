//! Shared helpers for the integration tests.
#![allow(dead_code)]

use racquet_tournament::{record_result, ParticipantRef, Tournament, TournamentFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Tournament in Setup with `n` teams named "Team 00", "Team 01", ...
pub fn tournament_with_teams(format: TournamentFormat, n: usize) -> Tournament {
    let mut t = Tournament::new(format);
    for i in 0..n {
        t.add_team(format!("Team {i:02}"), Vec::new()).unwrap();
    }
    t
}

/// Rotation tournament in Setup with players "P0".."P7".
pub fn rotation_tournament() -> Tournament {
    let mut t = Tournament::new(TournamentFormat::Rotation);
    for i in 0..8 {
        t.add_player(format!("P{i}")).unwrap();
    }
    t
}

/// Registration index of a team side.
pub fn team_index(t: &Tournament, side: &ParticipantRef) -> usize {
    let id = side.team_id().expect("team side");
    t.teams.iter().position(|team| &team.id == id).expect("registered team")
}

/// Record every open match of the current phase; the earlier-registered team wins 11-5.
pub fn play_current_phase(t: &mut Tournament) {
    let view: &Tournament = t;
    let open: Vec<(String, bool)> = view
        .matches_in(view.status)
        .filter(|m| !m.is_decided())
        .map(|m| {
            let first_wins = team_index(view, &m.team_ids[0]) < team_index(view, &m.team_ids[1]);
            (m.id.clone(), first_wins)
        })
        .collect();
    for (id, first_wins) in open {
        let (s1, s2) = if first_wins { (11, 5) } else { (5, 11) };
        record_result(t, &id, s1, s2).unwrap();
    }
}

/// Undecided match ids of the current phase.
pub fn open_matches(t: &Tournament) -> Vec<String> {
    t.matches_in(t.status)
        .filter(|m| !m.is_decided())
        .map(|m| m.id.clone())
        .collect()
}
