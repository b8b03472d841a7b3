use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::BearerAuth;
use crate::domain::player::{NewPlayer, Player, PlayerPatch};
use crate::domain::repositories::PlayerRepository;
use crate::domain::team::PlayerSnapshot;
use crate::infrastructure::repositories::PostgresPlayerRepository;

/// Request body for creating a player
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub age: i32,
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
    pub wicket_keeping: f64,
}

/// Request body for partially updating a player
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub batting: Option<f64>,
    pub bowling: Option<f64>,
    pub fielding: Option<f64>,
    pub wicket_keeping: Option<f64>,
}

/// Player as returned by the API; the assigned flag stays internal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
    pub wicket_keeping: f64,
}

impl From<&Player> for PlayerResponse {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            age: p.age,
            batting: p.batting,
            bowling: p.bowling,
            fielding: p.fielding,
            wicket_keeping: p.wicket_keeping,
        }
    }
}

impl From<PlayerSnapshot> for PlayerResponse {
    fn from(s: PlayerSnapshot) -> Self {
        Self {
            id: s.id,
            name: s.name,
            age: s.age,
            batting: s.batting,
            bowling: s.bowling,
            fielding: s.fielding,
            wicket_keeping: s.wicket_keeping,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// Malformed identifiers read as not-found, not as a parse error.
fn parse_player_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found("Player not found"))
}

/// Create a new player
///
/// POST /api/players
pub async fn create_player(
    State(pool): State<PgPool>,
    BearerAuth(_user_id): BearerAuth,
    Json(req): Json<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let player = NewPlayer::new(
        &req.name,
        req.age,
        req.batting,
        req.bowling,
        req.fielding,
        req.wicket_keeping,
    )?;

    let repo = PostgresPlayerRepository::new(pool);
    let created = repo.create(player).await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&created))))
}

/// List players with limit/skip paging
///
/// GET /api/players
pub async fn list_players(
    State(pool): State<PgPool>,
    BearerAuth(_user_id): BearerAuth,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let limit = query.limit.unwrap_or(200);
    let skip = query.skip.unwrap_or(0);
    if !(1..=1000).contains(&limit) {
        return Err(ApiError::bad_request("limit must be between 1 and 1000"));
    }
    if skip < 0 {
        return Err(ApiError::bad_request("skip must not be negative"));
    }

    let repo = PostgresPlayerRepository::new(pool);
    let players = repo.list(limit, skip).await?;

    Ok(Json(players.iter().map(PlayerResponse::from).collect()))
}

/// Get a player by id
///
/// GET /api/players/:id
pub async fn get_player(
    State(pool): State<PgPool>,
    BearerAuth(_user_id): BearerAuth,
    Path(id): Path<String>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let id = parse_player_id(&id)?;

    let repo = PostgresPlayerRepository::new(pool);
    let player = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Player not found"))?;

    Ok(Json(PlayerResponse::from(&player)))
}

/// Partially update a player
///
/// PATCH /api/players/:id
pub async fn update_player(
    State(pool): State<PgPool>,
    BearerAuth(_user_id): BearerAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let id = parse_player_id(&id)?;
    let patch = PlayerPatch::new(
        req.name.as_deref(),
        req.age,
        req.batting,
        req.bowling,
        req.fielding,
        req.wicket_keeping,
    )?;

    let repo = PostgresPlayerRepository::new(pool);
    // nothing to update: return the current row
    let player = if patch.is_empty() {
        repo.find_by_id(id).await?
    } else {
        repo.update(id, patch).await?
    };

    let player = player.ok_or_else(|| ApiError::not_found("Player not found"))?;
    Ok(Json(PlayerResponse::from(&player)))
}

/// Delete a player
///
/// DELETE /api/players/:id
pub async fn delete_player(
    State(pool): State<PgPool>,
    BearerAuth(_user_id): BearerAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_player_id(&id)?;

    let repo = PostgresPlayerRepository::new(pool);
    if !repo.delete(id).await? {
        return Err(ApiError::not_found("Player not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
