//! Tournament business logic: pairing, format scheduling, standings, results and phase progression.

pub mod pairing;
mod progression;
mod results;
mod scheduler;
mod setup;
mod standings;

pub use pairing::{olympic_crossing, rotation_schedule, round_robin, single_match};
pub use progression::{advance_phase, get_next_phase, is_phase_complete, Advance};
pub use results::record_result;
pub use scheduler::{
    distribute_into_groups, generate_matches, group_count, split_into_groups, PhaseSchedule,
};
pub use setup::start_tournament;
pub use standings::{
    get_qualified_teams, group_standings, leaderboard, losers, qualified_ids, rank_standings,
    LeaderboardEntry, Standing,
};
