use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::player::{NewPlayer, Player, PlayerPatch};

/// Repository trait for the player collection
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert a new player; the store assigns the identifier.
    async fn create(&self, player: NewPlayer) -> StoreResult<Player>;

    /// List players in insertion order with limit/skip paging.
    async fn list(&self, limit: i64, skip: i64) -> StoreResult<Vec<Player>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Player>>;

    /// The eligible pool: every player whose assigned flag is not true,
    /// in insertion order, without any limit. Read-only.
    async fn find_unassigned(&self) -> StoreResult<Vec<Player>>;

    /// Apply a partial update; returns the updated player, or None when
    /// the id is unknown.
    async fn update(&self, id: Uuid, patch: PlayerPatch) -> StoreResult<Option<Player>>;

    /// Returns false when the id is unknown.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
