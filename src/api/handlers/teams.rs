use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::BearerAuth;
use crate::api::AppState;
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::{assemble, PlayerRef, Team, TeamStats};
use crate::infrastructure::repositories::{PostgresPlayerRepository, PostgresTeamRepository};

use super::players::PlayerResponse;

/// Request body for team generation
///
/// The composition fields are validated to sum to `team_size` but are
/// not consulted by selection; role thresholds are fixed.
#[derive(Debug, Deserialize)]
pub struct TeamCreateRequest {
    pub name: Option<String>,
    #[serde(default = "default_team_size")]
    pub team_size: u32,
    #[serde(default = "default_batsmen")]
    pub batsmen: u32,
    #[serde(default = "default_bowlers")]
    pub bowlers: u32,
    #[serde(default = "default_keepers")]
    pub keepers: u32,
    #[serde(default = "default_allrounders")]
    pub allrounders: u32,
}

fn default_team_size() -> u32 {
    11
}
fn default_batsmen() -> u32 {
    5
}
fn default_bowlers() -> u32 {
    4
}
fn default_keepers() -> u32 {
    1
}
fn default_allrounders() -> u32 {
    1
}

impl TeamCreateRequest {
    fn normalized(&self) -> u32 {
        self.batsmen + self.bowlers + self.keepers + self.allrounders
    }
}

/// Team as returned by list endpoints: member names only
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub size: i32,
    pub stats: TeamStats,
    pub players: Vec<String>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            size: team.size(),
            stats: team.stats(),
            players: team.player_names(),
        }
    }
}

/// Team as returned by the detail endpoint: resolved members
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub size: i32,
    pub stats: TeamStats,
    pub players: Vec<PlayerResponse>,
}

/// Malformed identifiers read as not-found, not as a parse error.
fn parse_team_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found("Team not found"))
}

/// Generate a team from the unassigned player pool
///
/// POST /api/teams/generate
pub async fn generate_team(
    State(state): State<AppState>,
    BearerAuth(_user_id): BearerAuth,
    Json(req): Json<TeamCreateRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    if !(5..=11).contains(&req.team_size) {
        return Err(ApiError::bad_request("team_size must be between 5 and 11"));
    }
    if let Some(name) = &req.name {
        if name.len() < 2 || name.len() > 80 {
            return Err(ApiError::bad_request(
                "name must be between 2 and 80 characters",
            ));
        }
    }
    if req.normalized() != req.team_size {
        return Err(ApiError::bad_request(format!(
            "Composition (batsmen+bowlers+keepers+allrounders) must equal team_size ({})",
            req.team_size
        )));
    }

    // hold the guard across pool-read, selection, and the assignment
    // write; see AppState
    let _guard = state.team_generation.lock().await;

    let player_repo = PostgresPlayerRepository::new(state.pool.clone());
    let team_repo = PostgresTeamRepository::new(state.pool.clone());

    let pool = player_repo.find_unassigned().await?;
    let existing = team_repo.count().await?;

    let assembled = assemble(&pool, req.name.as_deref(), existing)?;
    let team = Team::new(assembled);
    team_repo.create_with_assignment(&team).await?;

    tracing::info!(team_id = %team.id(), name = team.name(), "team generated");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List all teams
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
    BearerAuth(_user_id): BearerAuth,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let team_repo = PostgresTeamRepository::new(state.pool.clone());
    let teams = team_repo.list().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team's detail view with resolved members
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    BearerAuth(_user_id): BearerAuth,
    Path(id): Path<String>,
) -> Result<Json<TeamDetailResponse>, ApiError> {
    let id = parse_team_id(&id)?;

    let team_repo = PostgresTeamRepository::new(state.pool.clone());
    let player_repo = PostgresPlayerRepository::new(state.pool.clone());

    let team = team_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;

    // embedded snapshots are used as-is; bare ids resolve against the
    // live collection and silently drop when the player is gone
    let mut players = Vec::with_capacity(team.players().len());
    for member in team.players() {
        match member {
            PlayerRef::Embedded(snapshot) => players.push(PlayerResponse::from(snapshot.clone())),
            PlayerRef::ById(player_id) => match player_repo.find_by_id(*player_id).await? {
                Some(player) => players.push(PlayerResponse::from(&player)),
                None => tracing::warn!(
                    team_id = %team.id(),
                    player_id = %player_id,
                    "team member no longer resolvable, omitted from detail view"
                ),
            },
        }
    }

    Ok(Json(TeamDetailResponse {
        id: team.id(),
        name: team.name().to_string(),
        // the size recorded at creation, even when fewer members resolve
        size: team.size(),
        stats: team.stats(),
        players,
    }))
}

/// Delete a team, releasing its players back to the pool
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    BearerAuth(_user_id): BearerAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_team_id(&id)?;

    let team_repo = PostgresTeamRepository::new(state.pool.clone());
    if !team_repo.delete_releasing_players(id).await? {
        return Err(ApiError::not_found("Team not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
