//! Format schedulers: decide which participants and which pairing generator each phase uses.

use crate::logic::pairing::{
    olympic_crossing, rotation_schedule, round_robin, single_match, ROTATION_PLAYERS,
};
use crate::logic::standings::{losers, qualified_ids};
use crate::models::{
    Group, Match, ParticipantRef, Phase, TeamId, Tournament, TournamentError, TournamentFormat,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::RangeInclusive;

/// Team limits for the group+knockout format.
pub const MIN_GROUP_KNOCKOUT_TEAMS: usize = 2;
pub const MAX_GROUP_KNOCKOUT_TEAMS: usize = 32;

/// Teams in a Super16 tournament (two groups of four).
pub const SUPER16_TEAMS: usize = 8;

/// Teams in a king-of-the-court tournament (four groups of four).
pub const KING_OF_THE_COURT_TEAMS: usize = 16;

/// Groups and matches created for one phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseSchedule {
    pub groups: Vec<Group>,
    pub matches: Vec<Match>,
}

impl PhaseSchedule {
    fn with_groups(groups: Vec<Group>, phase: Phase) -> Self {
        let matches = round_robin(&groups, phase);
        Self { groups, matches }
    }

    fn without_groups(matches: Vec<Match>) -> Self {
        Self {
            groups: Vec::new(),
            matches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Generate the groups and matches of the tournament's current phase.
///
/// Returns an empty schedule when the phase already has matches. A participant count the phase
/// cannot be built from is reported as `WrongParticipantCount`.
pub fn generate_matches<R: Rng + ?Sized>(
    tournament: &Tournament,
    rng: &mut R,
) -> Result<PhaseSchedule, TournamentError> {
    let phase = tournament.status;
    if matches!(phase, Phase::Setup | Phase::Finished | Phase::ThirdPlace) {
        return Err(TournamentError::InvalidState);
    }
    if tournament.matches_in(phase).next().is_some() {
        log::debug!("Matches for {} already generated", phase);
        return Ok(PhaseSchedule::default());
    }

    let schedule = match tournament.format {
        TournamentFormat::Rotation => schedule_rotation(tournament, phase),
        TournamentFormat::GroupKnockout => schedule_group_knockout(tournament, phase, rng),
        TournamentFormat::Super16 => schedule_super16(tournament, phase),
        TournamentFormat::KingOfTheCourt => schedule_king_of_the_court(tournament, phase, rng),
    };
    match &schedule {
        Ok(s) => log::debug!(
            "Generated {} group(s) and {} match(es) for {}",
            s.groups.len(),
            s.matches.len(),
            phase
        ),
        Err(e) => log::warn!("Could not generate {}: {}", phase, e),
    }
    schedule
}

fn wrong_count(phase: Phase, expected: RangeInclusive<usize>, actual: usize) -> TournamentError {
    TournamentError::WrongParticipantCount {
        phase,
        expected,
        actual,
    }
}

fn schedule_rotation(
    tournament: &Tournament,
    phase: Phase,
) -> Result<PhaseSchedule, TournamentError> {
    if phase != Phase::Playing {
        return Err(TournamentError::InvalidState);
    }
    if tournament.players.len() != ROTATION_PLAYERS {
        return Err(wrong_count(
            phase,
            ROTATION_PLAYERS..=ROTATION_PLAYERS,
            tournament.players.len(),
        ));
    }
    Ok(PhaseSchedule::without_groups(rotation_schedule(&tournament.players)))
}

fn schedule_group_knockout<R: Rng + ?Sized>(
    tournament: &Tournament,
    phase: Phase,
    rng: &mut R,
) -> Result<PhaseSchedule, TournamentError> {
    match phase {
        Phase::GroupStage => {
            let n = tournament.teams.len();
            if !(MIN_GROUP_KNOCKOUT_TEAMS..=MAX_GROUP_KNOCKOUT_TEAMS).contains(&n) {
                return Err(wrong_count(
                    phase,
                    MIN_GROUP_KNOCKOUT_TEAMS..=MAX_GROUP_KNOCKOUT_TEAMS,
                    n,
                ));
            }
            let groups = distribute_into_groups(team_ids(tournament), group_count(n), phase, rng);
            Ok(PhaseSchedule::with_groups(groups, phase))
        }
        _ => schedule_knockout(tournament, phase),
    }
}

fn schedule_super16(
    tournament: &Tournament,
    phase: Phase,
) -> Result<PhaseSchedule, TournamentError> {
    match phase {
        Phase::GroupStage => {
            let n = tournament.teams.len();
            if n != SUPER16_TEAMS {
                return Err(wrong_count(phase, SUPER16_TEAMS..=SUPER16_TEAMS, n));
            }
            let groups = split_into_groups(team_ids(tournament), 2, phase);
            Ok(PhaseSchedule::with_groups(groups, phase))
        }
        _ => schedule_knockout(tournament, phase),
    }
}

fn schedule_king_of_the_court<R: Rng + ?Sized>(
    tournament: &Tournament,
    phase: Phase,
    rng: &mut R,
) -> Result<PhaseSchedule, TournamentError> {
    let (ids, count) = match phase {
        Phase::Phase1Groups => {
            let n = tournament.teams.len();
            if n != KING_OF_THE_COURT_TEAMS {
                return Err(wrong_count(
                    phase,
                    KING_OF_THE_COURT_TEAMS..=KING_OF_THE_COURT_TEAMS,
                    n,
                ));
            }
            let mut ids = team_ids(tournament);
            ids.shuffle(rng);
            (ids, 4)
        }
        Phase::Phase2Playoffs => (entrant_team_ids(tournament, phase, 8)?, 2),
        Phase::Phase3Final => (entrant_team_ids(tournament, phase, 4)?, 1),
        _ => return Err(TournamentError::InvalidState),
    };
    let groups = split_into_groups(ids, count, phase);
    Ok(PhaseSchedule::with_groups(groups, phase))
}

/// Elimination phases shared by the group+knockout and Super16 formats.
fn schedule_knockout(
    tournament: &Tournament,
    phase: Phase,
) -> Result<PhaseSchedule, TournamentError> {
    let previous = tournament
        .phase_before(phase)
        .ok_or(TournamentError::InvalidState)?;
    let entrants = qualified_ids(tournament, previous);
    match phase {
        Phase::RoundOf16 | Phase::Quarterfinals | Phase::Semifinals => {
            let expected = match phase {
                Phase::RoundOf16 => 16,
                Phase::Quarterfinals => 8,
                _ => 4,
            };
            if entrants.len() != expected {
                return Err(wrong_count(phase, expected..=expected, entrants.len()));
            }
            Ok(PhaseSchedule::without_groups(olympic_crossing(&entrants, phase)))
        }
        Phase::Final => {
            if entrants.len() != 2 {
                return Err(wrong_count(phase, 2..=2, entrants.len()));
            }
            let mut matches = single_match(&entrants, Phase::Final);
            if previous == Phase::Semifinals {
                matches.extend(single_match(
                    &losers(tournament, Phase::Semifinals),
                    Phase::ThirdPlace,
                ));
            }
            Ok(PhaseSchedule::without_groups(matches))
        }
        _ => Err(TournamentError::InvalidState),
    }
}

/// Seeded qualifiers of the phase before `phase`, as team ids; exactly `expected` of them.
fn entrant_team_ids(
    tournament: &Tournament,
    phase: Phase,
    expected: usize,
) -> Result<Vec<TeamId>, TournamentError> {
    let previous = tournament
        .phase_before(phase)
        .ok_or(TournamentError::InvalidState)?;
    let ids: Vec<TeamId> = qualified_ids(tournament, previous)
        .into_iter()
        .filter_map(|side| match side {
            ParticipantRef::Team(id) => Some(id),
            ParticipantRef::PlayerPair(..) => None,
        })
        .collect();
    if ids.len() != expected {
        return Err(wrong_count(phase, expected..=expected, ids.len()));
    }
    Ok(ids)
}

fn team_ids(tournament: &Tournament) -> Vec<TeamId> {
    tournament.teams.iter().map(|t| t.id.clone()).collect()
}

/// Number of groups for `n` teams: groups of 4, or of 3 when fours would leave a group under 3.
pub fn group_count(n: usize) -> usize {
    let size = if n % 4 == 0 || n % 4 == 3 { 4 } else { 3 };
    n.div_ceil(size)
}

/// Shuffle, then deal team i into group i mod `count`. A count of 0 is treated as 1.
pub fn distribute_into_groups<R: Rng + ?Sized>(
    mut ids: Vec<TeamId>,
    count: usize,
    phase: Phase,
    rng: &mut R,
) -> Vec<Group> {
    let count = count.max(1);
    ids.shuffle(rng);
    let mut buckets: Vec<Vec<TeamId>> = vec![Vec::new(); count];
    for (i, id) in ids.into_iter().enumerate() {
        buckets[i % count].push(id);
    }
    buckets
        .into_iter()
        .enumerate()
        .map(|(index, team_ids)| Group::new(phase, index, team_ids))
        .collect()
}

/// Consecutive slices in the given order: first `n / count` teams form group A, and so on.
pub fn split_into_groups(ids: Vec<TeamId>, count: usize, phase: Phase) -> Vec<Group> {
    let size = ids.len().div_ceil(count.max(1)).max(1);
    ids.chunks(size)
        .enumerate()
        .map(|(index, chunk)| Group::new(phase, index, chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn group_count_prefers_fours() {
        assert_eq!(group_count(8), 2);
        assert_eq!(group_count(7), 2);
        assert_eq!(group_count(16), 4);
        assert_eq!(group_count(6), 2);
        assert_eq!(group_count(5), 2);
        assert_eq!(group_count(32), 8);
        assert_eq!(group_count(2), 1);
    }

    #[test]
    fn distributed_groups_differ_by_at_most_one() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 2..=32 {
            let ids: Vec<TeamId> = (0..n).map(|i| format!("t{i}")).collect();
            let groups =
                distribute_into_groups(ids.clone(), group_count(n), Phase::GroupStage, &mut rng);
            let sizes: Vec<usize> = groups.iter().map(|g| g.team_ids.len()).collect();
            let min = sizes.iter().min().copied().unwrap_or(0);
            let max = sizes.iter().max().copied().unwrap_or(0);
            assert!(max - min <= 1, "n={n} sizes={sizes:?}");
            let mut all: Vec<TeamId> = groups.into_iter().flat_map(|g| g.team_ids).collect();
            all.sort();
            let mut expected = ids;
            expected.sort();
            assert_eq!(all, expected);
        }
    }

    #[test]
    fn distribute_into_zero_groups_makes_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let ids: Vec<TeamId> = (0..5).map(|i| format!("t{i}")).collect();
        let groups = distribute_into_groups(ids, 0, Phase::GroupStage, &mut rng);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].team_ids.len(), 5);
    }

    #[test]
    fn wrong_count_reports_the_accepted_range() {
        let exact = wrong_count(Phase::Semifinals, 4..=4, 3);
        assert_eq!(exact.to_string(), "Phase semifinals needs exactly 4 participants (got 3)");
        let range = wrong_count(Phase::GroupStage, 2..=32, 33);
        assert_eq!(range.to_string(), "Phase group_stage needs 2 to 32 participants (got 33)");
    }

    #[test]
    fn split_keeps_order() {
        let ids: Vec<TeamId> = (0..8).map(|i| format!("t{i}")).collect();
        let groups = split_into_groups(ids, 2, Phase::Phase2Playoffs);
        assert_eq!(groups[0].team_ids, vec!["t0", "t1", "t2", "t3"]);
        assert_eq!(groups[1].team_ids, vec!["t4", "t5", "t6", "t7"]);
        assert_eq!(groups[1].id, "phase2_playoffs-B");
    }
}
