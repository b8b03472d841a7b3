// Team domain module
// Contains the team aggregate, value objects, and the selection algorithm

#![allow(clippy::module_inception)]

pub mod selection;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use selection::{assemble, AssembledTeam, SelectionError, TEAM_SIZE};
pub use team::Team;
pub use value_objects::{PlayerRef, PlayerSnapshot, TeamStats};
