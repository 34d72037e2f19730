//! Match and ParticipantRef.

use crate::models::group::GroupId;
use crate::models::phase::Phase;
use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match. Prefixed with the phase key.
pub type MatchId = String;

/// One side of a match: a registered team, or an ad-hoc pair of players (rotation format).
///
/// Serialized untagged: a team is a plain id string, a pair is a two-element array.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantRef {
    Team(TeamId),
    PlayerPair(PlayerId, PlayerId),
}

impl ParticipantRef {
    pub fn team(id: impl Into<TeamId>) -> Self {
        ParticipantRef::Team(id.into())
    }

    pub fn pair(a: impl Into<PlayerId>, b: impl Into<PlayerId>) -> Self {
        ParticipantRef::PlayerPair(a.into(), b.into())
    }

    /// Team id, if this side is a team.
    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            ParticipantRef::Team(id) => Some(id),
            ParticipantRef::PlayerPair(..) => None,
        }
    }

    /// Ids credited with this side's games: the team, or both players of a pair.
    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            ParticipantRef::Team(id) => (id.as_str(), None),
            ParticipantRef::PlayerPair(a, b) => (a.as_str(), Some(b.as_str())),
        };
        std::iter::once(first).chain(second)
    }

    /// Whether `player` plays on this side.
    pub fn contains_player(&self, player: &str) -> bool {
        match self {
            ParticipantRef::Team(_) => false,
            ParticipantRef::PlayerPair(a, b) => a == player || b == player,
        }
    }
}

/// A single match between two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub phase: Phase,
    /// Set for round-robin matches.
    pub group_id: Option<GroupId>,
    /// Rotation round number (1-based).
    pub round: Option<u32>,
    pub team_ids: [ParticipantRef; 2],
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    /// None until decided. Always one of `team_ids`.
    pub winner_id: Option<ParticipantRef>,
}

impl Match {
    pub fn new(phase: Phase, side_1: ParticipantRef, side_2: ParticipantRef) -> Self {
        Self {
            id: format!("{}-{}", phase.key(), Uuid::new_v4().simple()),
            phase,
            group_id: None,
            round: None,
            team_ids: [side_1, side_2],
            score1: None,
            score2: None,
            winner_id: None,
        }
    }

    pub fn in_group(mut self, group_id: impl Into<GroupId>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn in_round(mut self, round: u32) -> Self {
        self.round = Some(round);
        self
    }

    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some()
    }

    /// The side that did not win, once decided.
    pub fn loser_id(&self) -> Option<&ParticipantRef> {
        let winner = self.winner_id.as_ref()?;
        self.team_ids.iter().find(|side| *side != winner)
    }

    /// Score from the point of view of `side`: (points for, points against).
    pub fn score_for(&self, side: &ParticipantRef) -> Option<(u32, u32)> {
        let (s1, s2) = (self.score1?, self.score2?);
        if &self.team_ids[0] == side {
            Some((s1, s2))
        } else if &self.team_ids[1] == side {
            Some((s2, s1))
        } else {
            None
        }
    }
}
