//! Pairing generators: round robin, olympic crossing, single match and the 8-player rotation.
//!
//! All generators are pure. A participant count they cannot pair yields no matches.

use crate::models::{Group, Match, ParticipantRef, Phase, Player};

/// Number of players the rotation schedule is built for.
pub const ROTATION_PLAYERS: usize = 8;

/// Fixed rotation schedule: 7 rounds of two doubles matches over player indexes 0..8.
///
/// Each pair of players partners exactly once and faces each other exactly twice.
const ROTATION_TABLE: [[((usize, usize), (usize, usize)); 2]; 7] = [
    [((0, 1), (2, 4)), ((3, 6), (5, 7))],
    [((1, 2), (3, 5)), ((4, 0), (6, 7))],
    [((2, 3), (4, 6)), ((5, 1), (0, 7))],
    [((3, 4), (5, 0)), ((6, 2), (1, 7))],
    [((4, 5), (6, 1)), ((0, 3), (2, 7))],
    [((5, 6), (0, 2)), ((1, 4), (3, 7))],
    [((6, 0), (1, 3)), ((2, 5), (4, 7))],
];

/// One match per unordered pair inside each group, pairs (i, j) with i < j in index order.
pub fn round_robin(groups: &[Group], phase: Phase) -> Vec<Match> {
    let mut matches = Vec::new();
    for group in groups {
        let ids = &group.team_ids;
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                matches.push(
                    Match::new(
                        phase,
                        ParticipantRef::team(ids[i].clone()),
                        ParticipantRef::team(ids[j].clone()),
                    )
                    .in_group(group.id.clone()),
                );
            }
        }
    }
    matches
}

/// Olympic crossing over a ranked list (best first): 1st vs last, 2nd vs second to last, ...
///
/// Odd or empty input produces no matches.
pub fn olympic_crossing(qualified: &[ParticipantRef], phase: Phase) -> Vec<Match> {
    let n = qualified.len();
    if n == 0 || n % 2 != 0 {
        return Vec::new();
    }
    (0..n / 2)
        .map(|i| Match::new(phase, qualified[i].clone(), qualified[n - 1 - i].clone()))
        .collect()
}

/// A single match between exactly two participants (final, third place).
pub fn single_match(participants: &[ParticipantRef], phase: Phase) -> Vec<Match> {
    match participants {
        [a, b] => vec![Match::new(phase, a.clone(), b.clone())],
        _ => Vec::new(),
    }
}

/// The rotation format's 14 matches for exactly 8 players, applied in the given order.
pub fn rotation_schedule(players: &[Player]) -> Vec<Match> {
    if players.len() != ROTATION_PLAYERS {
        return Vec::new();
    }
    let pair = |(a, b): (usize, usize)| {
        ParticipantRef::pair(players[a].id.clone(), players[b].id.clone())
    };
    ROTATION_TABLE
        .iter()
        .zip(1u32..)
        .flat_map(|(round, number)| {
            round
                .iter()
                .map(move |&(side_1, side_2)| {
                    Match::new(Phase::Playing, pair(side_1), pair(side_2)).in_round(number)
                })
        })
        .collect()
}
