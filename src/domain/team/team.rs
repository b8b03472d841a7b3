use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::selection::AssembledTeam;
use super::value_objects::{PlayerRef, TeamStats};

/// Team aggregate root
///
/// A team holds a frozen snapshot of the players chosen at creation time
/// plus their identifiers, which gate re-use of those players until the
/// team is deleted.
///
/// # Invariants
/// - Created only from an `AssembledTeam` (never assembled by hand), so
///   `size` equals the number of embedded members at creation
/// - The member snapshot is immutable once created
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    size: i32,
    players: Vec<PlayerRef>,
    player_ids: Vec<Uuid>,
    stats: TeamStats,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a team from the assembler's output, assigning a fresh id.
    pub fn new(assembled: AssembledTeam) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: assembled.name,
            size: assembled.size as i32,
            players: assembled
                .players
                .into_iter()
                .map(PlayerRef::Embedded)
                .collect(),
            player_ids: assembled.player_ids,
            stats: assembled.stats,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The size recorded at creation; detail views may resolve fewer
    /// members when players have since been deleted.
    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn players(&self) -> &[PlayerRef] {
        &self.players
    }

    pub fn player_ids(&self) -> &[Uuid] {
        &self.player_ids
    }

    pub fn stats(&self) -> TeamStats {
        self.stats
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Member names for list views; bare-id references carry no name and
    /// are skipped.
    pub fn player_names(&self) -> Vec<String> {
        self.players
            .iter()
            .filter_map(|m| m.name().map(str::to_string))
            .collect()
    }

    /// Reconstructs a Team from persistence layer data, bypassing
    /// assembly. Only for repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        size: i32,
        players: Vec<PlayerRef>,
        player_ids: Vec<Uuid>,
        stats: TeamStats,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            size,
            players,
            player_ids,
            stats,
            created_at,
        }
    }
}
