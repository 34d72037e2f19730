//! Phase keys and tournament formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage of a tournament. Doubles as the tournament status and as the tag on each match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Registering players and teams; not started.
    #[default]
    Setup,
    /// Single phase of the rotation format.
    Playing,
    GroupStage,
    RoundOf16,
    Quarterfinals,
    Semifinals,
    /// As a status: final and third-place matches in progress together.
    Final,
    /// Only ever tags matches; the status stays `Final` while it is played.
    ThirdPlace,
    Phase1Groups,
    Phase2Playoffs,
    Phase3Final,
    Finished,
}

impl Phase {
    /// Stable snake_case key (used in match and group ids).
    pub fn key(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Playing => "playing",
            Phase::GroupStage => "group_stage",
            Phase::RoundOf16 => "round_of_16",
            Phase::Quarterfinals => "quarterfinals",
            Phase::Semifinals => "semifinals",
            Phase::Final => "final",
            Phase::ThirdPlace => "third_place",
            Phase::Phase1Groups => "phase1_groups",
            Phase::Phase2Playoffs => "phase2_playoffs",
            Phase::Phase3Final => "phase3_final",
            Phase::Finished => "finished",
        }
    }

    /// Phases played as round-robin groups.
    pub fn is_group_phase(self) -> bool {
        matches!(
            self,
            Phase::GroupStage | Phase::Phase1Groups | Phase::Phase2Playoffs | Phase::Phase3Final
        )
    }

    /// Single-elimination phases (winners advance).
    pub fn is_elimination(self) -> bool {
        matches!(
            self,
            Phase::RoundOf16
                | Phase::Quarterfinals
                | Phase::Semifinals
                | Phase::Final
                | Phase::ThirdPlace
        )
    }

    /// Phases after which the tournament is over.
    pub fn is_last(self) -> bool {
        matches!(self, Phase::Playing | Phase::Final | Phase::Phase3Final)
    }

    /// Whether a match tagged `self` is played while the tournament status is `status`.
    pub fn belongs_to(self, status: Phase) -> bool {
        self == status || (self == Phase::ThirdPlace && status == Phase::Final)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How the tournament is played.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// 8 individual players, 7 rounds of doubles with rotating partners.
    Rotation,
    /// 2 to 32 teams: random groups of 3-4, then single elimination.
    #[default]
    GroupKnockout,
    /// Exactly 8 teams: two fixed groups of 4, then semifinals and finals.
    Super16,
    /// 16 teams over three round-robin phases (16 -> 8 -> 4).
    KingOfTheCourt,
}

impl TournamentFormat {
    /// First phase played after `setup`.
    pub fn initial_phase(self) -> Phase {
        match self {
            TournamentFormat::Rotation => Phase::Playing,
            TournamentFormat::GroupKnockout | TournamentFormat::Super16 => Phase::GroupStage,
            TournamentFormat::KingOfTheCourt => Phase::Phase1Groups,
        }
    }

    /// Individual formats have players as participants instead of teams.
    pub fn is_individual(self) -> bool {
        self == TournamentFormat::Rotation
    }
}
