//! Tournament and TournamentError.

use crate::models::game::{Match, MatchId, ParticipantRef};
use crate::models::group::Group;
use crate::models::phase::{Phase, TournamentFormat};
use crate::models::player::{Player, PlayerId};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Names must contain at least one non-whitespace character.
    EmptyName,
    /// A player or team with this name already exists (names are unique, case-insensitive).
    DuplicateName,
    PlayerNotFound(PlayerId),
    TeamNotFound(TeamId),
    /// The player is part of a registered team and cannot be removed.
    PlayerInUse(PlayerId),
    /// A team needs either no players or exactly two distinct players.
    InvalidTeamSize(usize),
    MatchNotFound(MatchId),
    /// Results are recorded once per match.
    MatchAlreadyDecided(MatchId),
    /// Ties are not allowed.
    TieScore,
    /// The phase cannot be generated from this many participants.
    WrongParticipantCount {
        phase: Phase,
        expected: RangeInclusive<usize>,
        actual: usize,
    },
    /// A completed phase produced a qualifier count with no matching bracket (no byes).
    NoBracketForQualifiers { phase: Phase, qualifiers: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::DuplicateName => {
                write!(f, "A participant with this name already exists")
            }
            TournamentError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            TournamentError::TeamNotFound(id) => write!(f, "Team {} not found", id),
            TournamentError::PlayerInUse(id) => write!(f, "Player {} belongs to a team", id),
            TournamentError::InvalidTeamSize(n) => {
                write!(f, "A team needs 0 or 2 distinct players (got {})", n)
            }
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::MatchAlreadyDecided(id) => {
                write!(f, "Match {} already has a result", id)
            }
            TournamentError::TieScore => write!(f, "Ties are not allowed"),
            TournamentError::WrongParticipantCount {
                phase,
                expected,
                actual,
            } if expected.start() == expected.end() => write!(
                f,
                "Phase {} needs exactly {} participants (got {})",
                phase,
                expected.start(),
                actual
            ),
            TournamentError::WrongParticipantCount {
                phase,
                expected,
                actual,
            } => write!(
                f,
                "Phase {} needs {} to {} participants (got {})",
                phase,
                expected.start(),
                expected.end(),
                actual
            ),
            TournamentError::NoBracketForQualifiers { phase, qualifiers } => write!(
                f,
                "No next phase for {} qualifiers out of {}",
                qualifiers, phase
            ),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: participants, groups, matches and the current phase.
///
/// Matches and groups are only ever appended; earlier phases stay in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub format: TournamentFormat,
    /// Current phase.
    pub status: Phase,
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create a new tournament in Setup state with no participants.
    pub fn new(format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            format,
            status: Phase::Setup,
            players: Vec::new(),
            teams: Vec::new(),
            groups: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn get_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn get_team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_team_mut(&mut self, id: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn get_match(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Matches played while the tournament is in `status` (third place counts towards `Final`).
    pub fn matches_in(&self, status: Phase) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.phase.belongs_to(status))
    }

    /// Groups created for `phase`, in creation order.
    pub fn groups_in(&self, phase: Phase) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(move |g| g.phase == phase)
    }

    /// The phase played just before `status`, found from the (append-only) match list.
    pub fn phase_before(&self, status: Phase) -> Option<Phase> {
        self.matches
            .iter()
            .rev()
            .map(|m| m.phase)
            .find(|p| !p.belongs_to(status) && *p != Phase::ThirdPlace)
    }

    /// Display name of a match side. Unknown ids map to "?".
    pub fn participant_name(&self, side: &ParticipantRef) -> String {
        match side {
            ParticipantRef::Team(id) => self
                .get_team(id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "?".to_string()),
            ParticipantRef::PlayerPair(a, b) => {
                let name = |id: &str| {
                    self.get_player(id)
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| "?".to_string())
                };
                format!("{} & {}", name(a), name(b))
            }
        }
    }

    fn name_taken(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name.eq_ignore_ascii_case(name))
            || self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name))
    }

    fn check_new_name(&self, name: &str) -> Result<(), TournamentError> {
        if self.status != Phase::Setup {
            return Err(TournamentError::InvalidState);
        }
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.name_taken(name) {
            return Err(TournamentError::DuplicateName);
        }
        Ok(())
    }

    /// Register a player (Setup only). Returns the new player's id.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, TournamentError> {
        let name = name.into();
        let name = name.trim();
        self.check_new_name(name)?;
        let player = Player::new(name);
        let id = player.id.clone();
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player by id (Setup only; not while the player is in a team).
    pub fn remove_player(&mut self, player_id: &str) -> Result<(), TournamentError> {
        if self.status != Phase::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| TournamentError::PlayerNotFound(player_id.to_string()))?;
        if self
            .teams
            .iter()
            .any(|t| t.player_ids.iter().any(|p| p == player_id))
        {
            return Err(TournamentError::PlayerInUse(player_id.to_string()));
        }
        self.players.remove(idx);
        Ok(())
    }

    /// Register a team (Setup only) with no players or two distinct registered players.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        player_ids: Vec<PlayerId>,
    ) -> Result<TeamId, TournamentError> {
        let name = name.into();
        let name = name.trim();
        self.check_new_name(name)?;
        match player_ids.as_slice() {
            [] => {}
            [a, b] if a != b => {
                for id in [a, b] {
                    if self.get_player(id).is_none() {
                        return Err(TournamentError::PlayerNotFound(id.clone()));
                    }
                }
            }
            other => return Err(TournamentError::InvalidTeamSize(other.len())),
        }
        let team = Team::new(name, player_ids);
        let id = team.id.clone();
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team by id (Setup only).
    pub fn remove_team(&mut self, team_id: &str) -> Result<(), TournamentError> {
        if self.status != Phase::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or_else(|| TournamentError::TeamNotFound(team_id.to_string()))?;
        self.teams.remove(idx);
        Ok(())
    }

    /// Back to Setup with the same participants. Clears groups, matches and stats.
    pub fn restart(&mut self) -> Result<(), TournamentError> {
        if self.status == Phase::Setup {
            return Err(TournamentError::InvalidState);
        }
        self.groups.clear();
        self.matches.clear();
        self.players.iter_mut().for_each(Player::reset_stats);
        self.teams.iter_mut().for_each(Team::reset_stats);
        self.status = Phase::Setup;
        Ok(())
    }
}
