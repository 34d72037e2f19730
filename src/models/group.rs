//! Round-robin group.

use crate::models::phase::Phase;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a group: `<phase>-<letter>`.
pub type GroupId = String;

/// A group of teams playing a round robin within one phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub phase: Phase,
    pub team_ids: Vec<TeamId>,
}

impl Group {
    /// Group number `index` (0-based) of `phase`: ids/names use letters A, B, C...
    pub fn new(phase: Phase, index: usize, team_ids: Vec<TeamId>) -> Self {
        let letter = group_letter(index);
        Self {
            id: format!("{}-{}", phase.key(), letter),
            name: format!("Group {letter}"),
            phase,
            team_ids,
        }
    }
}

fn group_letter(index: usize) -> char {
    // At most 11 groups (32 teams in groups of 3), well within A-Z.
    char::from(b'A' + (index % 26) as u8)
}
