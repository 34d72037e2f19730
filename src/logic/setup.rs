//! Setup phase: start tournament (transition from Setup to the format's first phase).

use crate::logic::scheduler::generate_matches;
use crate::models::{Phase, Tournament, TournamentError};
use rand::Rng;

/// Start the tournament: move to the format's first phase and append its groups and matches.
///
/// Stays in Setup if the participants do not fit the format.
pub fn start_tournament<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if tournament.status != Phase::Setup {
        return Err(TournamentError::InvalidState);
    }
    tournament.status = tournament.format.initial_phase();
    let schedule = match generate_matches(tournament, rng) {
        Ok(schedule) => schedule,
        Err(e) => {
            tournament.status = Phase::Setup;
            return Err(e);
        }
    };
    log::info!(
        "Tournament {} started: {:?}, {} ({} matches)",
        tournament.id,
        tournament.format,
        tournament.status,
        schedule.matches.len()
    );
    tournament.groups.extend(schedule.groups);
    tournament.matches.extend(schedule.matches);
    Ok(())
}
