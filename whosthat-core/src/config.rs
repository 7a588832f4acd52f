//! Game configuration.

use std::fmt;

/// Upper bound of the generation selector (Gen 1 + Gen 2).
pub const MAX_GENERATION_LIMIT: u32 = 251;

/// Upper bound on which numeric ids are eligible for selection.
///
/// Always within `[1, MAX_GENERATION_LIMIT]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationLimit(u32);

impl GenerationLimit {
    /// First generation only.
    pub const GEN_1: GenerationLimit = GenerationLimit(151);
    /// First and second generations.
    pub const GEN_2: GenerationLimit = GenerationLimit(MAX_GENERATION_LIMIT);

    /// Clamp an arbitrary selector value into the valid range.
    pub fn new(limit: u32) -> Self {
        Self(limit.clamp(1, MAX_GENERATION_LIMIT))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Cycle between the selector presets.
    pub fn next_preset(self) -> Self {
        if self < Self::GEN_2 {
            Self::GEN_2
        } else {
            Self::GEN_1
        }
    }
}

impl Default for GenerationLimit {
    fn default() -> Self {
        Self::GEN_1
    }
}

impl fmt::Display for GenerationLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide game settings, owned by the round controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Which ids are in play.
    pub generation_limit: GenerationLimit,

    /// Whether rounds use the deterministic daily pick.
    pub daily: bool,
}

impl GameConfig {
    /// Gen 1, random rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation limit (clamped).
    pub fn with_generation_limit(mut self, limit: u32) -> Self {
        self.generation_limit = GenerationLimit::new(limit);
        self
    }

    /// Enable or disable daily mode.
    pub fn with_daily(mut self, daily: bool) -> Self {
        self.daily = daily;
        self
    }
}
