//! Adaptive scoring policy
//!
//! Maps an evaluator score onto a verdict and a difficulty adjustment.
//! Both thresholds are strict, so scores of exactly 0.4 or 0.7 land in the
//! neutral band and change nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores strictly above this count as correct
pub const CORRECT_THRESHOLD: f64 = 0.7;

/// Scores strictly below this count as wrong
pub const WRONG_THRESHOLD: f64 = 0.4;

/// Question difficulty, always within `[0, 10]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(0);
    pub const MAX: Difficulty = Difficulty(10);
    /// Every interview opens at this level
    pub const START: Difficulty = Difficulty(5);

    /// Create a difficulty, clamping into range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn harder(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    fn easier(self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::START
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(format!("difficulty {} is out of range 0..=10", value));
        }
        Ok(Self(value))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a single answer was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Wrong,
    Neutral,
}

/// Result of applying the policy to one score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub difficulty: Difficulty,
    pub verdict: Verdict,
}

/// Apply the scoring policy to a score at the given difficulty
pub fn apply(score: f64, difficulty: Difficulty) -> ScoreOutcome {
    if score > CORRECT_THRESHOLD {
        ScoreOutcome {
            difficulty: difficulty.harder(),
            verdict: Verdict::Correct,
        }
    } else if score < WRONG_THRESHOLD {
        ScoreOutcome {
            difficulty: difficulty.easier(),
            verdict: Verdict::Wrong,
        }
    } else {
        ScoreOutcome {
            difficulty,
            verdict: Verdict::Neutral,
        }
    }
}
