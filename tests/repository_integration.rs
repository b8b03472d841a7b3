//! Integration tests for the repository layer
//!
//! These verify that the Postgres implementations honor the repository
//! contracts: CRUD, the unassigned pool view, and the transactional
//! assign/release pairs around team creation and deletion. They need a
//! migrated PostgreSQL database reachable via DATABASE_URL; run with
//! `cargo test -- --ignored` against a scratch database.

use crease_api::auth::password::hash_password;
use crease_api::domain::player::{NewPlayer, Player, PlayerPatch};
use crease_api::domain::repositories::user_repository::{User, UserRepository};
use crease_api::domain::repositories::{PlayerRepository, TeamRepository};
use crease_api::domain::team::{assemble, Team};
use crease_api::domain::user::value_objects::Email;
use crease_api::infrastructure::repositories::{
    PostgresPlayerRepository, PostgresTeamRepository, PostgresUserRepository,
};
use sqlx::PgPool;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Serializes tests that sweep the players/teams tables.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

async fn reset_collections(pool: &PgPool) {
    sqlx::query("DELETE FROM teams")
        .execute(pool)
        .await
        .expect("Failed to clear teams");
    sqlx::query("DELETE FROM players")
        .execute(pool)
        .await
        .expect("Failed to clear players");
}

fn new_player(name: &str, batting: f64, bowling: f64, fielding: f64, keeping: f64) -> NewPlayer {
    NewPlayer::new(name, 25, batting, bowling, fielding, keeping).expect("valid player")
}

/// Insert the canonical 11-player pool: 4 bowlers, 1 keeper, 6 batters
async fn seed_eleven(repo: &PostgresPlayerRepository) -> Vec<Player> {
    let payloads = vec![
        new_player("Bowler A", 70.0, 90.0, 50.0, 0.0),
        new_player("Bowler B", 70.0, 85.0, 50.0, 0.0),
        new_player("Bowler C", 70.0, 80.0, 50.0, 0.0),
        new_player("Bowler D", 70.0, 75.0, 50.0, 0.0),
        new_player("Keeper", 70.0, 10.0, 50.0, 90.0),
        new_player("Batter 1", 71.0, 10.0, 50.0, 0.0),
        new_player("Batter 2", 70.0, 10.0, 50.0, 0.0),
        new_player("Batter 3", 70.0, 10.0, 50.0, 0.0),
        new_player("Batter 4", 70.0, 10.0, 50.0, 0.0),
        new_player("Batter 5", 70.0, 10.0, 50.0, 0.0),
        new_player("Batter 6", 70.0, 10.0, 50.0, 0.0),
    ];

    let mut created = Vec::new();
    for payload in payloads {
        created.push(repo.create(payload).await.expect("create player"));
    }
    created
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn player_create_and_fetch_round_trip() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool);

    let created = repo
        .create(new_player("Round Trip", 81.5, 42.0, 63.0, 12.5))
        .await
        .expect("create player");

    let fetched = repo
        .find_by_id(created.id)
        .await
        .expect("find player")
        .expect("player exists");

    assert_eq!(fetched, created);
    assert!(!fetched.assigned);

    assert!(repo.delete(created.id).await.expect("delete player"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn player_patch_updates_subset() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool);

    let created = repo
        .create(new_player("Patchable", 50.0, 50.0, 50.0, 50.0))
        .await
        .expect("create player");

    let patch = PlayerPatch::new(Some("Patched"), None, Some(75.0), None, None, None)
        .expect("valid patch");
    let updated = repo
        .update(created.id, patch)
        .await
        .expect("update player")
        .expect("player exists");

    assert_eq!(updated.name, "Patched");
    assert_eq!(updated.batting, 75.0);
    assert_eq!(updated.bowling, 50.0);
    assert_eq!(updated.age, created.age);

    assert!(repo.delete(created.id).await.expect("delete player"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn update_unknown_player_returns_none() {
    let pool = setup_test_db().await;
    let repo = PostgresPlayerRepository::new(pool);

    let patch = PlayerPatch::new(Some("Ghost"), None, None, None, None, None).expect("valid patch");
    let updated = repo.update(Uuid::new_v4(), patch).await.expect("update");
    assert!(updated.is_none());

    assert!(!repo.delete(Uuid::new_v4()).await.expect("delete"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn unassigned_pool_excludes_consumed_players() {
    let _guard = DB_LOCK.lock().await;
    let pool = setup_test_db().await;
    reset_collections(&pool).await;

    let player_repo = PostgresPlayerRepository::new(pool.clone());
    let team_repo = PostgresTeamRepository::new(pool.clone());

    let created = seed_eleven(&player_repo).await;

    let eligible = player_repo.find_unassigned().await.expect("pool view");
    assert_eq!(eligible.len(), 11);

    // consume the whole pool
    let assembled = assemble(&eligible, None, 0).expect("assemble");
    let team = Team::new(assembled);
    team_repo
        .create_with_assignment(&team)
        .await
        .expect("create team");

    let eligible = player_repo.find_unassigned().await.expect("pool view");
    assert!(eligible.is_empty());

    // every created player is now flagged
    for player in &created {
        let stored = player_repo
            .find_by_id(player.id)
            .await
            .expect("find player")
            .expect("player exists");
        assert!(stored.assigned);
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn deleting_team_releases_players() {
    let _guard = DB_LOCK.lock().await;
    let pool = setup_test_db().await;
    reset_collections(&pool).await;

    let player_repo = PostgresPlayerRepository::new(pool.clone());
    let team_repo = PostgresTeamRepository::new(pool.clone());

    seed_eleven(&player_repo).await;
    let eligible = player_repo.find_unassigned().await.expect("pool view");
    let team = Team::new(assemble(&eligible, None, 0).expect("assemble"));
    team_repo
        .create_with_assignment(&team)
        .await
        .expect("create team");
    assert_eq!(team_repo.count().await.expect("count"), 1);

    let stored = team_repo
        .find_by_id(team.id())
        .await
        .expect("find team")
        .expect("team exists");
    assert_eq!(stored.size(), 11);
    assert_eq!(stored.player_ids().len(), 11);
    assert_eq!(stored.player_names().len(), 11);

    // release: every member returns to the eligible pool
    assert!(team_repo
        .delete_releasing_players(team.id())
        .await
        .expect("delete team"));
    assert_eq!(team_repo.count().await.expect("count"), 0);

    let eligible = player_repo.find_unassigned().await.expect("pool view");
    assert_eq!(eligible.len(), 11);
    for id in stored.player_ids() {
        assert!(eligible.iter().any(|p| p.id == *id));
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn deleting_unknown_team_is_a_noop() {
    let _guard = DB_LOCK.lock().await;
    let pool = setup_test_db().await;
    reset_collections(&pool).await;

    let player_repo = PostgresPlayerRepository::new(pool.clone());
    let team_repo = PostgresTeamRepository::new(pool.clone());

    seed_eleven(&player_repo).await;

    assert!(!team_repo
        .delete_releasing_players(Uuid::new_v4())
        .await
        .expect("delete"));

    // nothing was touched
    assert_eq!(player_repo.find_unassigned().await.expect("pool").len(), 11);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn user_create_and_find_by_email() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool);

    let email = Email::new(format!("repo-{}@example.com", Uuid::new_v4())).expect("valid email");
    let user = User {
        id: Uuid::new_v4(),
        username: "repo-test".to_string(),
        email: email.clone(),
        password_hash: hash_password("testpassword").expect("hash"),
    };

    let user_id = repo.create(user).await.expect("create user");

    let found = repo
        .find_by_email(&email)
        .await
        .expect("find user")
        .expect("user exists");
    assert_eq!(found.id, user_id);
    assert_eq!(found.username, "repo-test");

    let missing = repo
        .find_by_email(&Email::new("nobody@example.com").expect("valid email"))
        .await
        .expect("find user");
    assert!(missing.is_none());
}
