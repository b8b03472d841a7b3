// Repository implementations (data access layer)

pub mod postgres_player_repository;
pub mod postgres_team_repository;
pub mod postgres_user_repository;

pub use postgres_player_repository::PostgresPlayerRepository;
pub use postgres_team_repository::PostgresTeamRepository;
pub use postgres_user_repository::PostgresUserRepository;
