//! Team data structure (doubles pair or a named side with no registered players).

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = String;

/// A registered team.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Exactly two players for doubles, empty when the team is just a name.
    pub player_ids: Vec<PlayerId>,
    pub games_played: u32,
    pub wins: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, player_ids: Vec<PlayerId>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            player_ids,
            ..Self::default()
        }
    }

    /// Record one finished game for this team.
    pub fn record_game(&mut self, points_for: u32, points_against: u32, won: bool) {
        self.games_played += 1;
        self.points_for += points_for;
        self.points_against += points_against;
        if won {
            self.wins += 1;
        }
    }

    pub fn reset_stats(&mut self) {
        self.games_played = 0;
        self.wins = 0;
        self.points_for = 0;
        self.points_against = 0;
    }
}
