//! Phase transitions: completion check, next-phase lookup and advancement.

use crate::logic::scheduler::generate_matches;
use crate::logic::standings::qualified_ids;
use crate::models::{Phase, Tournament, TournamentError};
use rand::Rng;

/// Outcome of an advancement attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Advance {
    /// Current phase still has undecided matches (or none yet).
    Pending,
    /// Moved to this phase and generated its matches.
    Advanced(Phase),
    /// Tournament is over.
    Finished,
}

/// True when the current phase has at least one match and every one of them has a winner.
pub fn is_phase_complete(tournament: &Tournament) -> bool {
    let mut current = tournament.matches_in(tournament.status).peekable();
    current.peek().is_some() && current.all(|m| m.is_decided())
}

/// Next phase after `current` given how many participants qualified out of it.
///
/// Falls back to `Finished` when no bracket fits.
pub fn get_next_phase(current: Phase, qualified_count: usize) -> Phase {
    match (current, qualified_count) {
        (Phase::GroupStage, 16) => Phase::RoundOf16,
        (Phase::GroupStage, 8) | (Phase::RoundOf16, 8) => Phase::Quarterfinals,
        (Phase::GroupStage, 4) | (Phase::Quarterfinals, 4) => Phase::Semifinals,
        (Phase::GroupStage, 2) | (Phase::Semifinals, 2) => Phase::Final,
        (Phase::Phase1Groups, 8) => Phase::Phase2Playoffs,
        (Phase::Phase2Playoffs, 4) => Phase::Phase3Final,
        _ => Phase::Finished,
    }
}

/// Advance the tournament if its current phase is complete.
///
/// Generates and appends the next phase's groups and matches, or marks the tournament finished
/// after its last phase. On error the tournament is left unchanged.
pub fn advance_phase<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<Advance, TournamentError> {
    let current = tournament.status;
    if matches!(current, Phase::Setup | Phase::Finished) {
        return Err(TournamentError::InvalidState);
    }
    if !is_phase_complete(tournament) {
        return Ok(Advance::Pending);
    }

    let qualifiers = qualified_ids(tournament, current).len();
    let next = get_next_phase(current, qualifiers);
    if next == Phase::Finished {
        if !current.is_last() {
            log::warn!("{} qualifiers out of {} fit no bracket", qualifiers, current);
            return Err(TournamentError::NoBracketForQualifiers {
                phase: current,
                qualifiers,
            });
        }
        tournament.status = Phase::Finished;
        log::info!("Tournament {} finished", tournament.id);
        return Ok(Advance::Finished);
    }

    tournament.status = next;
    let schedule = match generate_matches(tournament, rng) {
        Ok(schedule) if !schedule.is_empty() => schedule,
        Ok(_) => {
            tournament.status = current;
            return Err(TournamentError::InvalidState);
        }
        Err(e) => {
            tournament.status = current;
            return Err(e);
        }
    };
    log::info!(
        "Tournament {}: {} -> {} ({} qualifiers, {} matches)",
        tournament.id,
        current,
        next,
        qualifiers,
        schedule.matches.len()
    );
    tournament.groups.extend(schedule.groups);
    tournament.matches.extend(schedule.matches);
    Ok(Advance::Advanced(next))
}
