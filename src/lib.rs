//! Racquet-sport tournament engine: library with models and progression logic.

pub mod logic;
pub mod models;

pub use logic::{
    advance_phase, generate_matches, get_next_phase, get_qualified_teams, group_standings,
    is_phase_complete, leaderboard, olympic_crossing, qualified_ids, record_result,
    rotation_schedule, round_robin, single_match, start_tournament, Advance, LeaderboardEntry,
    PhaseSchedule, Standing,
};
pub use models::{
    Group, GroupId, Match, MatchId, ParticipantRef, Phase, Player, PlayerId, Team, TeamId,
    Tournament, TournamentError, TournamentFormat, TournamentId,
};
