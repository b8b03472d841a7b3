use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::StoreResult;
use crate::domain::user::value_objects::Email;

/// User account data for persistence
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Email,
    pub password_hash: String,
}

/// Repository trait for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; emails are unique.
    async fn create(&self, user: User) -> StoreResult<Uuid>;

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<User>>;
}
