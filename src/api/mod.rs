// API layer module (adapters for controllers)

pub mod errors;
pub mod handlers;
pub mod middleware;

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
///
/// `team_generation` serializes team generation: the guard is held
/// across pool-read, selection, and the assignment write, so two
/// concurrent requests can never both pick the same unassigned player.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub team_generation: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            team_generation: Arc::new(Mutex::new(())),
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}
