use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::player::Player;

/// Aggregate skill averages across a team's members.
///
/// Averages divide by the fixed team size of 11 and are rounded to two
/// decimals at assembly time; see `selection::assemble`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub avg_batting: f64,
    pub avg_bowling: f64,
    pub avg_fielding: f64,
}

/// Frozen copy of a player's fields taken when a team is created.
///
/// Later edits to the live player do not propagate into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
    pub wicket_keeping: f64,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            age: p.age,
            batting: p.batting,
            bowling: p.bowling,
            fielding: p.fielding,
            wicket_keeping: p.wicket_keeping,
        }
    }
}

/// A stored reference to a team member.
///
/// Teams created by the assembler always embed full snapshots, but the
/// stored document may also carry a bare identifier; both shapes
/// deserialize. Resolution happens explicitly in the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerRef {
    Embedded(PlayerSnapshot),
    ById(Uuid),
}

impl PlayerRef {
    pub fn player_id(&self) -> Uuid {
        match self {
            PlayerRef::Embedded(snapshot) => snapshot.id,
            PlayerRef::ById(id) => *id,
        }
    }

    /// Returns the member's name when the reference carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            PlayerRef::Embedded(snapshot) => Some(&snapshot.name),
            PlayerRef::ById(_) => None,
        }
    }
}
