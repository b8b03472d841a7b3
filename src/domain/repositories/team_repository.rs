use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::team::Team;

/// Repository trait for the team collection
///
/// The two multi-document operations (create + assign, release + delete)
/// must each run inside a single store transaction so that players can
/// never end up durably assigned to a missing team or locked by a
/// deleted one.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persist the team document and mark every chosen player assigned,
    /// atomically.
    async fn create_with_assignment(&self, team: &Team) -> StoreResult<()>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Team>>;

    async fn list(&self) -> StoreResult<Vec<Team>>;

    /// Number of existing teams, used for default team naming.
    async fn count(&self) -> StoreResult<i64>;

    /// Un-assign every player the team holds and delete the team
    /// document, atomically. Returns false when the id is unknown.
    async fn delete_releasing_players(&self, id: Uuid) -> StoreResult<bool>;
}
