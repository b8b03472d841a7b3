pub mod auth;
pub mod players;
pub mod teams;
