//! Drives one tournament from registration to the end with random scores.
//! Run with: cargo run --bin simulate
//! Override with env: FORMAT (rotation, group_knockout, super16, king_of_the_court),
//! TEAMS (team count, ignored for rotation), SEED (u64, reproducible run), POINTS_TO_WIN.

use racquet_tournament::{
    advance_phase, leaderboard, record_result, start_tournament, Advance, Tournament,
    TournamentError, TournamentFormat,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn default_format() -> TournamentFormat {
    TournamentFormat::GroupKnockout
}

fn default_teams(format: TournamentFormat) -> usize {
    match format {
        TournamentFormat::KingOfTheCourt => 16,
        _ => 8,
    }
}

fn default_points_to_win() -> u32 {
    11
}

fn parse_format(value: &str) -> Option<TournamentFormat> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_string())).ok()
}

/// Register participants the format plays with.
fn register(tournament: &mut Tournament, teams: usize) -> Result<(), TournamentError> {
    if tournament.format.is_individual() {
        for i in 1..=8 {
            tournament.add_player(format!("Player {i}"))?;
        }
        return Ok(());
    }
    for i in 1..=teams {
        let a = tournament.add_player(format!("Player {i}a"))?;
        let b = tournament.add_player(format!("Player {i}b"))?;
        tournament.add_team(format!("Team {i}"), vec![a, b])?;
    }
    Ok(())
}

/// Play every open match of the current phase with a random winner.
fn play_phase<R: Rng>(
    tournament: &mut Tournament,
    rng: &mut R,
    points_to_win: u32,
) -> Result<(), TournamentError> {
    let open: Vec<String> = tournament
        .matches_in(tournament.status)
        .filter(|m| !m.is_decided())
        .map(|m| m.id.clone())
        .collect();
    for id in open {
        let loser = rng.gen_range(0..points_to_win);
        let (score1, score2) = if rng.gen_bool(0.5) {
            (points_to_win, loser)
        } else {
            (loser, points_to_win)
        };
        record_result(tournament, &id, score1, score2)?;
    }
    Ok(())
}

fn run(
    format: TournamentFormat,
    teams: usize,
    points_to_win: u32,
    rng: &mut StdRng,
) -> Result<Tournament, TournamentError> {
    let mut tournament = Tournament::new(format);
    register(&mut tournament, teams)?;
    start_tournament(&mut tournament, rng)?;

    loop {
        play_phase(&mut tournament, rng, points_to_win)?;
        match advance_phase(&mut tournament, rng)? {
            Advance::Advanced(phase) => log::info!("Now playing {}", phase),
            Advance::Finished => break,
            Advance::Pending => continue,
        }
    }
    Ok(tournament)
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let format = std::env::var("FORMAT")
        .ok()
        .and_then(|f| parse_format(&f))
        .unwrap_or_else(default_format);
    let teams: usize = std::env::var("TEAMS")
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or_else(|| default_teams(format));
    let points_to_win: u32 = std::env::var("POINTS_TO_WIN")
        .ok()
        .and_then(|p| p.parse().ok())
        .filter(|p| *p > 0)
        .unwrap_or_else(default_points_to_win);
    let mut rng = match std::env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!(
        "Simulating {:?} with {} teams, games to {}",
        format,
        teams,
        points_to_win
    );

    let tournament = match run(format, teams, points_to_win, &mut rng) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Simulation stopped: {}", e);
            std::process::exit(1);
        }
    };

    for (rank, entry) in leaderboard(&tournament).iter().enumerate() {
        log::info!(
            "{:>2}. {:<16} {:>2}W {:>2}L {:>5}% {:+}",
            rank + 1,
            entry.name,
            entry.wins,
            entry.losses,
            entry.win_rate,
            entry.point_differential
        );
    }
    if let Ok(json) = serde_json::to_string(&tournament) {
        log::debug!("Final state: {}", json);
    }
}
