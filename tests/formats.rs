//! Integration tests for the rotation, Super16 and king-of-the-court formats.

mod common;

use common::{play_current_phase, rng, rotation_tournament, team_index, tournament_with_teams};
use racquet_tournament::{
    advance_phase, generate_matches, leaderboard, qualified_ids, record_result, start_tournament,
    Advance, ParticipantRef, Phase, TournamentError, TournamentFormat,
};
use std::collections::HashMap;

#[test]
fn rotation_plays_fourteen_matches_then_finishes() {
    let mut rng = rng();
    let mut t = rotation_tournament();
    start_tournament(&mut t, &mut rng).unwrap();
    assert_eq!(t.status, Phase::Playing);
    assert_eq!(t.matches.len(), 14);
    assert!(t.groups.is_empty());
    assert!(t
        .matches
        .iter()
        .all(|m| m.phase == Phase::Playing
            && m.team_ids.iter().all(|s| matches!(s, ParticipantRef::PlayerPair(..)))));

    // First side wins matches in odd rounds, second side in even rounds.
    let results: Vec<(String, u32)> = t
        .matches
        .iter()
        .map(|m| (m.id.clone(), m.round.unwrap()))
        .collect();
    for (id, round) in results {
        let (s1, s2) = if round % 2 == 1 { (11, 7) } else { (6, 11) };
        record_result(&mut t, &id, s1, s2).unwrap();
    }
    assert!(t.matches.iter().all(|m| m.winner_id.is_some()));

    let mut expected_wins: HashMap<String, u32> = HashMap::new();
    for m in &t.matches {
        if let Some(ParticipantRef::PlayerPair(a, b)) = &m.winner_id {
            *expected_wins.entry(a.clone()).or_default() += 1;
            *expected_wins.entry(b.clone()).or_default() += 1;
        }
    }

    assert_eq!(advance_phase(&mut t, &mut rng).unwrap(), Advance::Finished);
    assert_eq!(t.status, Phase::Finished);
    assert_eq!(t.matches.len(), 14);

    let board = leaderboard(&t);
    assert_eq!(board.len(), 8);
    for entry in &board {
        assert_eq!(entry.games_played, 7);
        assert_eq!(entry.wins, expected_wins.get(&entry.id).copied().unwrap_or(0));
        assert_eq!(entry.losses, 7 - entry.wins);
    }
    assert!(board.windows(2).all(|w| w[0].wins >= w[1].wins));
}

#[test]
fn rotation_needs_exactly_eight_players() {
    let mut rng = rng();
    let mut t = rotation_tournament();
    let last = t.players[7].id.clone();
    t.remove_player(&last).unwrap();
    assert_eq!(
        start_tournament(&mut t, &mut rng),
        Err(TournamentError::WrongParticipantCount {
            phase: Phase::Playing,
            expected: 8..=8,
            actual: 7
        })
    );
    assert_eq!(t.status, Phase::Setup);
}

#[test]
fn super16_uses_fixed_groups_then_semifinals() {
    let mut rng = rng();
    let mut t = tournament_with_teams(TournamentFormat::Super16, 8);
    start_tournament(&mut t, &mut rng).unwrap();
    assert_eq!(t.groups.len(), 2);
    let ids: Vec<_> = t.teams.iter().map(|team| team.id.clone()).collect();
    assert_eq!(t.groups[0].team_ids, ids[..4].to_vec());
    assert_eq!(t.groups[1].team_ids, ids[4..].to_vec());
    assert_eq!(t.matches.len(), 12);

    play_current_phase(&mut t);
    assert_eq!(advance_phase(&mut t, &mut rng).unwrap(), Advance::Advanced(Phase::Semifinals));

    // Teams 00 and 04 win their groups; 01 and 05 finish second.
    let semis: Vec<Vec<usize>> = t
        .matches_in(Phase::Semifinals)
        .map(|m| m.team_ids.iter().map(|s| team_index(&t, s)).collect())
        .collect();
    assert_eq!(semis, vec![vec![0, 5], vec![4, 1]]);

    play_current_phase(&mut t);
    assert_eq!(advance_phase(&mut t, &mut rng).unwrap(), Advance::Advanced(Phase::Final));
    play_current_phase(&mut t);
    assert_eq!(advance_phase(&mut t, &mut rng).unwrap(), Advance::Finished);
}

#[test]
fn super16_rejects_other_team_counts() {
    let mut rng = rng();
    let mut t = tournament_with_teams(TournamentFormat::Super16, 7);
    assert!(matches!(
        start_tournament(&mut t, &mut rng),
        Err(TournamentError::WrongParticipantCount { actual: 7, .. })
    ));
}

#[test]
fn king_of_the_court_runs_three_round_robin_phases() {
    let mut rng = rng();
    let mut t = tournament_with_teams(TournamentFormat::KingOfTheCourt, 16);
    start_tournament(&mut t, &mut rng).unwrap();
    assert_eq!(t.status, Phase::Phase1Groups);
    assert_eq!(t.groups_in(Phase::Phase1Groups).count(), 4);
    assert!(t.groups.iter().all(|g| g.team_ids.len() == 4));
    assert_eq!(t.matches.len(), 24);

    play_current_phase(&mut t);
    let seeds: Vec<_> = qualified_ids(&t, Phase::Phase1Groups)
        .into_iter()
        .map(|s| s.team_id().cloned().unwrap())
        .collect();
    assert_eq!(seeds.len(), 8);
    assert_eq!(
        advance_phase(&mut t, &mut rng).unwrap(),
        Advance::Advanced(Phase::Phase2Playoffs)
    );
    let playoff_groups: Vec<_> = t.groups_in(Phase::Phase2Playoffs).cloned().collect();
    assert_eq!(playoff_groups.len(), 2);
    assert_eq!(playoff_groups[0].team_ids, seeds[..4].to_vec());
    assert_eq!(playoff_groups[1].team_ids, seeds[4..].to_vec());
    assert_eq!(t.matches_in(Phase::Phase2Playoffs).count(), 12);

    play_current_phase(&mut t);
    assert_eq!(
        advance_phase(&mut t, &mut rng).unwrap(),
        Advance::Advanced(Phase::Phase3Final)
    );
    assert_eq!(t.groups_in(Phase::Phase3Final).count(), 1);
    assert_eq!(t.matches_in(Phase::Phase3Final).count(), 6);

    play_current_phase(&mut t);
    assert_eq!(advance_phase(&mut t, &mut rng).unwrap(), Advance::Finished);
    assert_eq!(t.groups.len(), 7);
    assert_eq!(t.matches.len(), 24 + 12 + 6);
}

#[test]
fn king_of_the_court_needs_sixteen_teams() {
    let mut rng = rng();
    let mut t = tournament_with_teams(TournamentFormat::KingOfTheCourt, 15);
    assert!(matches!(
        start_tournament(&mut t, &mut rng),
        Err(TournamentError::WrongParticipantCount { phase: Phase::Phase1Groups, .. })
    ));
}

#[test]
fn generate_outside_a_playable_phase_is_invalid() {
    let mut rng = rng();
    let t = tournament_with_teams(TournamentFormat::GroupKnockout, 8);
    assert_eq!(
        generate_matches(&t, &mut rng),
        Err(TournamentError::InvalidState)
    );
}
