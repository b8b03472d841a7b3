use thiserror::Error;
use uuid::Uuid;

use super::value_objects::{PlayerSnapshot, TeamStats};
use crate::domain::player::Player;

/// Fixed number of players per team.
pub const TEAM_SIZE: usize = 11;
/// Mandatory bowler-eligible picks per team.
pub const REQUIRED_BOWLERS: usize = 4;

/// Precondition failures of the selection algorithm.
///
/// All are reported to the caller verbatim; no partial team is ever
/// persisted on failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("not enough players left to form a team of 11")]
    InsufficientPool,
    #[error("not enough bowlers available (need at least 4)")]
    InsufficientBowlers,
    #[error("no wicketkeeper available")]
    NoKeeper,
}

pub type SelectionResult<T> = Result<T, SelectionError>;

/// Output of a successful selection: the chosen snapshots, the ids the
/// caller must mark assigned, and the computed name and stats.
#[derive(Debug, Clone)]
pub struct AssembledTeam {
    pub name: String,
    pub size: usize,
    pub players: Vec<PlayerSnapshot>,
    pub player_ids: Vec<Uuid>,
    pub stats: TeamStats,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Selects 11 players from the eligible pool.
///
/// Deterministic given the pool order and skill values:
/// 1. Fails with `InsufficientPool` when fewer than 11 players remain.
/// 2. Takes the top 4 bowler-eligible players by bowling score
///    (`InsufficientBowlers` when fewer than 4 exist) and the top
///    keeper-eligible player by wicket-keeping score (`NoKeeper` when
///    none exists). Ties keep pool order.
/// 3. Fills the remaining slots from the rest of the pool ranked by
///    `Player::overall_score`, again stable on ties.
///
/// Aggregate stats divide by the fixed team size of 11, not the chosen
/// count, and are rounded to two decimals. The team name falls back to
/// `"Team {existing_team_count + 1}"` when no name is requested.
pub fn assemble(
    pool: &[Player],
    requested_name: Option<&str>,
    existing_team_count: i64,
) -> SelectionResult<AssembledTeam> {
    if pool.len() < TEAM_SIZE {
        return Err(SelectionError::InsufficientPool);
    }

    let mut bowlers: Vec<&Player> = pool.iter().filter(|p| p.is_bowler_eligible()).collect();
    let mut keepers: Vec<&Player> = pool.iter().filter(|p| p.is_keeper_eligible()).collect();
    bowlers.sort_by(|a, b| b.bowling.total_cmp(&a.bowling));
    keepers.sort_by(|a, b| b.wicket_keeping.total_cmp(&a.wicket_keeping));

    if bowlers.len() < REQUIRED_BOWLERS {
        return Err(SelectionError::InsufficientBowlers);
    }
    let mut chosen: Vec<&Player> = bowlers[..REQUIRED_BOWLERS].to_vec();

    let keeper = *keepers.first().ok_or(SelectionError::NoKeeper)?;
    // the top keeper may already be among the mandatory bowlers
    if !chosen.iter().any(|p| p.id == keeper.id) {
        chosen.push(keeper);
    }

    let remaining_slots = TEAM_SIZE - chosen.len();
    let mut remaining: Vec<&Player> = pool
        .iter()
        .filter(|p| !chosen.iter().any(|c| c.id == p.id))
        .collect();
    remaining.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()));
    chosen.extend(remaining.into_iter().take(remaining_slots));

    // divisor is the fixed team size, not chosen.len()
    let divisor = TEAM_SIZE as f64;
    let stats = TeamStats {
        avg_batting: round2(chosen.iter().map(|p| p.batting).sum::<f64>() / divisor),
        avg_bowling: round2(chosen.iter().map(|p| p.bowling).sum::<f64>() / divisor),
        avg_fielding: round2(chosen.iter().map(|p| p.fielding).sum::<f64>() / divisor),
    };

    let name = match requested_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Team {}", existing_team_count + 1),
    };

    Ok(AssembledTeam {
        name,
        size: TEAM_SIZE,
        player_ids: chosen.iter().map(|p| p.id).collect(),
        players: chosen.iter().map(|p| PlayerSnapshot::from(*p)).collect(),
        stats,
    })
}
