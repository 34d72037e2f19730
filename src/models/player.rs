//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams, rotation pairs and lookups).
pub type PlayerId = String;

/// A registered player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Player {
    /// Create a new player with the given name. Stats start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record one finished game for this player.
    pub fn record_game(&mut self, points_for: u32, points_against: u32, won: bool) {
        self.games_played += 1;
        self.points_for += points_for;
        self.points_against += points_against;
        if won {
            self.wins += 1;
        }
    }

    /// Zero all stats (used when a tournament is restarted).
    pub fn reset_stats(&mut self) {
        self.games_played = 0;
        self.wins = 0;
        self.points_for = 0;
        self.points_against = 0;
    }
}
