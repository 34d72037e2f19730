//! Recording match results and applying them to participant stats.

use crate::models::{ParticipantRef, Tournament, TournamentError};

/// Record the score of a match in the current phase. The higher score wins; ties are rejected.
///
/// Each match is recorded once. Stats of both sides (teams, or both players of each pair) are
/// updated. Nothing changes on error.
pub fn record_result(
    tournament: &mut Tournament,
    match_id: &str,
    score1: u32,
    score2: u32,
) -> Result<(), TournamentError> {
    let game = tournament
        .get_match(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    if !game.phase.belongs_to(tournament.status) {
        return Err(TournamentError::InvalidState);
    }
    if game.is_decided() {
        return Err(TournamentError::MatchAlreadyDecided(match_id.to_string()));
    }
    if score1 == score2 {
        return Err(TournamentError::TieScore);
    }
    let sides = game.team_ids.clone();
    for side in &sides {
        check_resolves(tournament, side)?;
    }

    let (winner, loser, winner_score, loser_score) = if score1 > score2 {
        (&sides[0], &sides[1], score1, score2)
    } else {
        (&sides[1], &sides[0], score2, score1)
    };
    apply_to_side(tournament, winner, winner_score, loser_score, true);
    apply_to_side(tournament, loser, loser_score, winner_score, false);

    if let Some(m) = tournament.matches.iter_mut().find(|m| m.id == match_id) {
        m.score1 = Some(score1);
        m.score2 = Some(score2);
        m.winner_id = Some(winner.clone());
    }
    log::debug!(
        "Match {}: {} {}-{} {}",
        match_id,
        tournament.participant_name(&sides[0]),
        score1,
        score2,
        tournament.participant_name(&sides[1])
    );
    Ok(())
}

fn check_resolves(tournament: &Tournament, side: &ParticipantRef) -> Result<(), TournamentError> {
    match side {
        ParticipantRef::Team(id) => tournament
            .get_team(id)
            .map(|_| ())
            .ok_or_else(|| TournamentError::TeamNotFound(id.clone())),
        ParticipantRef::PlayerPair(a, b) => {
            for id in [a, b] {
                if tournament.get_player(id).is_none() {
                    return Err(TournamentError::PlayerNotFound(id.clone()));
                }
            }
            Ok(())
        }
    }
}

/// Apply one finished game to a side that is known to resolve.
fn apply_to_side(
    tournament: &mut Tournament,
    side: &ParticipantRef,
    points_for: u32,
    points_against: u32,
    won: bool,
) {
    match side {
        ParticipantRef::Team(id) => {
            if let Some(team) = tournament.get_team_mut(id) {
                team.record_game(points_for, points_against, won);
            }
        }
        ParticipantRef::PlayerPair(a, b) => {
            for id in [a, b] {
                if let Some(player) = tournament.get_player_mut(id) {
                    player.record_game(points_for, points_against, won);
                }
            }
        }
    }
}
