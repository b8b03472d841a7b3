// Repository traits (ports) implemented by the infrastructure layer

pub mod player_repository;
pub mod team_repository;
pub mod user_repository;

pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
pub use user_repository::{User, UserRepository};
