use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::player::{NewPlayer, Player, PlayerPatch};
use crate::domain::repositories::PlayerRepository;

const PLAYER_COLUMNS: &str = "id, name, age, batting, bowling, fielding, wicket_keeping, assigned";

#[derive(FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    age: i32,
    batting: f64,
    bowling: f64,
    fielding: f64,
    wicket_keeping: f64,
    assigned: bool,
}

impl From<PlayerRow> for Player {
    fn from(r: PlayerRow) -> Self {
        Player {
            id: r.id,
            name: r.name,
            age: r.age,
            batting: r.batting,
            bowling: r.bowling,
            fielding: r.fielding,
            wicket_keeping: r.wicket_keeping,
            assigned: r.assigned,
        }
    }
}

/// PostgreSQL implementation of PlayerRepository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn create(&self, player: NewPlayer) -> StoreResult<Player> {
        let row: PlayerRow = sqlx::query_as(&format!(
            "INSERT INTO players (id, name, age, batting, bowling, fielding, wicket_keeping) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&player.name)
        .bind(player.age)
        .bind(player.batting)
        .bind(player.bowling)
        .bind(player.fielding)
        .bind(player.wicket_keeping)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self, limit: i64, skip: i64) -> StoreResult<Vec<Player>> {
        let rows: Vec<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Player>> {
        let row: Option<PlayerRow> =
            sqlx::query_as(&format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Player::from))
    }

    async fn find_unassigned(&self) -> StoreResult<Vec<Player>> {
        // no limit: the assembler needs the full eligible pool
        let rows: Vec<PlayerRow> = sqlx::query_as(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE NOT assigned ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn update(&self, id: Uuid, patch: PlayerPatch) -> StoreResult<Option<Player>> {
        let row: Option<PlayerRow> = sqlx::query_as(&format!(
            "UPDATE players SET \
                name = COALESCE($2, name), \
                age = COALESCE($3, age), \
                batting = COALESCE($4, batting), \
                bowling = COALESCE($5, bowling), \
                fielding = COALESCE($6, fielding), \
                wicket_keeping = COALESCE($7, wicket_keeping) \
             WHERE id = $1 \
             RETURNING {PLAYER_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.age)
        .bind(patch.batting)
        .bind(patch.bowling)
        .bind(patch.fielding)
        .bind(patch.wicket_keeping)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Player::from))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
