//! Data structures for the tournament: participants, groups, matches, tournament state.

mod game;
mod group;
mod phase;
mod player;
mod team;
mod tournament;

pub use game::{Match, MatchId, ParticipantRef};
pub use group::{Group, GroupId};
pub use phase::{Phase, TournamentFormat};
pub use player::{Player, PlayerId};
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId};
