use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{PlayerRef, Team, TeamStats};

const TEAM_COLUMNS: &str =
    "id, name, size, players, player_ids, avg_batting, avg_bowling, avg_fielding, created_at";

#[derive(FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    size: i32,
    players: Json<Vec<PlayerRef>>,
    player_ids: Vec<Uuid>,
    avg_batting: f64,
    avg_bowling: f64,
    avg_fielding: f64,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::from_persistence(
            r.id,
            r.name,
            r.size,
            r.players.0,
            r.player_ids,
            TeamStats {
                avg_batting: r.avg_batting,
                avg_bowling: r.avg_bowling,
                avg_fielding: r.avg_fielding,
            },
            r.created_at,
        )
    }
}

/// PostgreSQL implementation of TeamRepository
///
/// The member snapshot is stored as a JSONB document; assignment flag
/// flips ride in the same transaction as the team insert or delete.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create_with_assignment(&self, team: &Team) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO teams \
                (id, name, size, players, player_ids, avg_batting, avg_bowling, avg_fielding, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.size())
        .bind(Json(team.players()))
        .bind(team.player_ids())
        .bind(team.stats().avg_batting)
        .bind(team.stats().avg_bowling)
        .bind(team.stats().avg_fielding)
        .bind(team.created_at())
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE players SET assigned = TRUE WHERE id = ANY($1)")
            .bind(team.player_ids())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Team>> {
        let row: Option<TeamRow> =
            sqlx::query_as(&format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Team::from))
    }

    async fn list(&self) -> StoreResult<Vec<Team>> {
        let rows: Vec<TeamRow> =
            sqlx::query_as(&format!("SELECT {TEAM_COLUMNS} FROM teams ORDER BY created_at, id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete_releasing_players(&self, id: Uuid) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;

        let player_ids: Option<Vec<Uuid>> =
            sqlx::query_scalar("SELECT player_ids FROM teams WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(player_ids) = player_ids else {
            return Ok(false);
        };

        sqlx::query("UPDATE players SET assigned = FALSE WHERE id = ANY($1)")
            .bind(&player_ids)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
