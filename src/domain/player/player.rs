use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Bowling score at or above this makes a player bowler-eligible.
pub const BOWLER_MIN_BOWLING: f64 = 60.0;
/// Wicket-keeping score at or above this makes a player keeper-eligible.
pub const KEEPER_MIN_KEEPING: f64 = 60.0;
/// Batting score at or above this makes a player batsman-eligible.
pub const BATSMAN_MIN_BATTING: f64 = 70.0;
/// Batting and bowling both at or above this make a player all-rounder-eligible.
pub const ALL_ROUNDER_MIN_SKILL: f64 = 50.0;

/// Field constraint violations for player input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be between 2 and 80 characters")]
    InvalidName,
    #[error("age must be between 10 and 60")]
    InvalidAge,
    #[error("{0} must be between 0 and 100")]
    SkillOutOfRange(&'static str),
}

fn check_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.len() < 2 || name.len() > 80 {
        return Err(ValidationError::InvalidName);
    }
    Ok(name.to_string())
}

fn check_age(age: i32) -> Result<i32, ValidationError> {
    if !(10..=60).contains(&age) {
        return Err(ValidationError::InvalidAge);
    }
    Ok(age)
}

fn check_skill(label: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::SkillOutOfRange(label));
    }
    Ok(value)
}

/// A validated player payload, ready for insertion.
///
/// The store assigns the identifier; everything else is required.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub age: i32,
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
    pub wicket_keeping: f64,
}

impl NewPlayer {
    /// Validates all fields: trimmed name of 2-80 characters, age 10-60,
    /// every skill within [0, 100].
    pub fn new(
        name: &str,
        age: i32,
        batting: f64,
        bowling: f64,
        fielding: f64,
        wicket_keeping: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: check_name(name)?,
            age: check_age(age)?,
            batting: check_skill("batting", batting)?,
            bowling: check_skill("bowling", bowling)?,
            fielding: check_skill("fielding", fielding)?,
            wicket_keeping: check_skill("wicketKeeping", wicket_keeping)?,
        })
    }
}

/// Partial update to a player; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub batting: Option<f64>,
    pub bowling: Option<f64>,
    pub fielding: Option<f64>,
    pub wicket_keeping: Option<f64>,
}

impl PlayerPatch {
    /// Validates every field that is present; trims the name.
    pub fn new(
        name: Option<&str>,
        age: Option<i32>,
        batting: Option<f64>,
        bowling: Option<f64>,
        fielding: Option<f64>,
        wicket_keeping: Option<f64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.map(check_name).transpose()?,
            age: age.map(check_age).transpose()?,
            batting: batting.map(|v| check_skill("batting", v)).transpose()?,
            bowling: bowling.map(|v| check_skill("bowling", v)).transpose()?,
            fielding: fielding.map(|v| check_skill("fielding", v)).transpose()?,
            wicket_keeping: wicket_keeping
                .map(|v| check_skill("wicketKeeping", v))
                .transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.batting.is_none()
            && self.bowling.is_none()
            && self.fielding.is_none()
            && self.wicket_keeping.is_none()
    }
}

/// A cricket player as stored.
///
/// `assigned` marks consumption by a team: assigned players are excluded
/// from the eligible pool until their team is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
    pub wicket_keeping: f64,
    pub assigned: bool,
}

impl Player {
    pub fn is_bowler_eligible(&self) -> bool {
        self.bowling >= BOWLER_MIN_BOWLING
    }

    pub fn is_keeper_eligible(&self) -> bool {
        self.wicket_keeping >= KEEPER_MIN_KEEPING
    }

    /// Classified but not consumed by selection.
    pub fn is_batsman_eligible(&self) -> bool {
        self.batting >= BATSMAN_MIN_BATTING
    }

    /// Classified but not consumed by selection.
    pub fn is_all_rounder_eligible(&self) -> bool {
        self.batting >= ALL_ROUNDER_MIN_SKILL && self.bowling >= ALL_ROUNDER_MIN_SKILL
    }

    /// Arithmetic mean of the non-zero skills.
    ///
    /// A skill of exactly 0 is excluded from both numerator and
    /// denominator; all four at 0 scores 0.
    pub fn overall_score(&self) -> f64 {
        let skills = [self.batting, self.bowling, self.fielding, self.wicket_keeping];
        let nonzero = skills.iter().filter(|s| **s > 0.0).count();
        if nonzero == 0 {
            return 0.0;
        }
        skills.iter().sum::<f64>() / nonzero as f64
    }
}
