//! Group standings, qualification and the tournament-wide leaderboard.

use crate::models::{Group, Match, ParticipantRef, Phase, Team, TeamId, Tournament};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Group points awarded for a win.
pub const POINTS_PER_WIN: u32 = 3;

/// Teams advancing from each group.
pub const QUALIFIERS_PER_GROUP: usize = 2;

/// One team's row in a group table. Only matches of that group count.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub played: u32,
    pub wins: u32,
    pub group_points: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Standing {
    pub fn point_differential(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}

/// Group points, then point differential, then points scored; all descending.
fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.group_points
        .cmp(&a.group_points)
        .then_with(|| b.point_differential().cmp(&a.point_differential()))
        .then_with(|| b.points_for.cmp(&a.points_for))
}

/// Stable sort by the group ranking keys; full ties keep their current order.
pub fn rank_standings(standings: &mut [Standing]) {
    standings.sort_by(compare_standings);
}

/// Ranked table for `group`, built from its decided matches in `matches`.
pub fn group_standings(group: &Group, matches: &[Match]) -> Vec<Standing> {
    let mut table: Vec<Standing> = group
        .team_ids
        .iter()
        .map(|id| Standing {
            team_id: id.clone(),
            ..Standing::default()
        })
        .collect();

    let decided = matches
        .iter()
        .filter(|m| m.group_id.as_deref() == Some(group.id.as_str()) && m.is_decided());
    for m in decided {
        for side in &m.team_ids {
            let (Some(team_id), Some((scored, conceded))) = (side.team_id(), m.score_for(side))
            else {
                continue;
            };
            let Some(row) = table.iter_mut().find(|s| &s.team_id == team_id) else {
                continue;
            };
            row.played += 1;
            row.points_for += scored;
            row.points_against += conceded;
            if m.winner_id.as_ref() == Some(side) {
                row.wins += 1;
                row.group_points += POINTS_PER_WIN;
            }
        }
    }

    rank_standings(&mut table);
    table
}

/// Participants that earned advancement out of `phase`, best seed first.
///
/// Group phases: the top two of each group, re-ranked together for seeding.
/// Elimination phases: the winners, in match order.
pub fn qualified_ids(tournament: &Tournament, phase: Phase) -> Vec<ParticipantRef> {
    if phase.is_group_phase() {
        let mut qualified: Vec<Standing> = tournament
            .groups_in(phase)
            .flat_map(|group| {
                group_standings(group, &tournament.matches)
                    .into_iter()
                    .take(QUALIFIERS_PER_GROUP)
            })
            .collect();
        rank_standings(&mut qualified);
        qualified
            .into_iter()
            .map(|s| ParticipantRef::Team(s.team_id))
            .collect()
    } else if phase.is_elimination() {
        tournament
            .matches
            .iter()
            .filter(|m| m.phase == phase)
            .filter_map(|m| m.winner_id.clone())
            .collect()
    } else {
        Vec::new()
    }
}

/// Losers of an elimination phase, in match order.
pub fn losers(tournament: &Tournament, phase: Phase) -> Vec<ParticipantRef> {
    tournament
        .matches
        .iter()
        .filter(|m| m.phase == phase)
        .filter_map(|m| m.loser_id().cloned())
        .collect()
}

/// Qualifiers of `phase` resolved to team entities. Ids that no longer resolve are skipped.
pub fn get_qualified_teams(tournament: &Tournament, phase: Phase) -> Vec<Team> {
    qualified_ids(tournament, phase)
        .iter()
        .filter_map(|side| {
            let team = side.team_id().and_then(|id| tournament.get_team(id));
            if team.is_none() {
                log::warn!("Qualifier {:?} of {} does not resolve to a team", side, phase);
            }
            team.cloned()
        })
        .collect()
}

/// One participant's row in the tournament-wide leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Team id, or player id in the rotation format.
    pub id: String,
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Rounded to a whole percent.
    pub win_percentage: u32,
    pub point_differential: i64,
    pub points_for: u32,
    pub points_against: u32,
    /// Win percentage with one decimal, e.g. "66.7".
    pub win_rate: String,
}

impl LeaderboardEntry {
    fn new(
        id: &str,
        name: &str,
        games_played: u32,
        wins: u32,
        points_for: u32,
        points_against: u32,
    ) -> Self {
        let ratio = if games_played == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(games_played) * 100.0
        };
        Self {
            id: id.to_string(),
            name: name.to_string(),
            games_played,
            wins,
            losses: games_played.saturating_sub(wins),
            win_percentage: ratio.round() as u32,
            point_differential: i64::from(points_for) - i64::from(points_against),
            points_for,
            points_against,
            win_rate: format!("{:.1}", ratio),
        }
    }
}

/// Games, wins and points of one leaderboard row, summed over decided matches.
#[derive(Default)]
struct Tally {
    games_played: u32,
    wins: u32,
    points_for: u32,
    points_against: u32,
}

/// Everyone in the tournament ranked by wins, point differential, then points scored.
///
/// Players are ranked in the rotation format (both partners share a pair's result), teams
/// otherwise. Built from every decided match regardless of phase, like the group tables.
pub fn leaderboard(tournament: &Tournament) -> Vec<LeaderboardEntry> {
    let mut rows: Vec<(&str, &str, Tally)> = if tournament.format.is_individual() {
        tournament
            .players
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str(), Tally::default()))
            .collect()
    } else {
        tournament
            .teams
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str(), Tally::default()))
            .collect()
    };

    for m in tournament.matches.iter().filter(|m| m.is_decided()) {
        for side in &m.team_ids {
            let won = m.winner_id.as_ref() == Some(side);
            let (scored, conceded) = m.score_for(side).unwrap_or((0, 0));
            for member in side.member_ids() {
                let Some((.., tally)) = rows.iter_mut().find(|(id, ..)| *id == member) else {
                    continue;
                };
                tally.games_played += 1;
                tally.points_for += scored;
                tally.points_against += conceded;
                if won {
                    tally.wins += 1;
                }
            }
        }
    }

    let mut entries: Vec<LeaderboardEntry> = rows
        .into_iter()
        .map(|(id, name, tally)| {
            LeaderboardEntry::new(
                id,
                name,
                tally.games_played,
                tally.wins,
                tally.points_for,
                tally.points_against,
            )
        })
        .collect();
    entries.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.point_differential.cmp(&a.point_differential))
            .then_with(|| b.points_for.cmp(&a.points_for))
    });
    entries
}
