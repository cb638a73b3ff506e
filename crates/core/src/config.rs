//! Engine configuration

use crate::types::DEFAULT_MAX_CASCADE_PASSES;

/// Which swaps the move validator accepts before checking for matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveRules {
    /// Require the two positions to be orthogonal neighbours.
    ///
    /// When false, any two distinct positions sharing a row or a column qualify.
    pub adjacent_only: bool,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Refill passes allowed per cascade before it is reported as runaway
    pub max_cascade_passes: usize,
    pub rules: MoveRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cascade_passes: DEFAULT_MAX_CASCADE_PASSES,
            rules: MoveRules::default(),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `MATCH3_MAX_CASCADE_PASSES`: positive integer
    /// - `MATCH3_ADJACENT_ONLY`: `1` or `true`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        use std::env;

        let max_cascade_passes = env::var("MATCH3_MAX_CASCADE_PASSES")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_MAX_CASCADE_PASSES);

        let adjacent_only = env::var("MATCH3_ADJACENT_ONLY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            max_cascade_passes,
            rules: MoveRules { adjacent_only },
        }
    }

    pub fn with_max_cascade_passes(mut self, max_cascade_passes: usize) -> Self {
        self.max_cascade_passes = max_cascade_passes;
        self
    }

    pub fn with_adjacent_only(mut self, adjacent_only: bool) -> Self {
        self.rules.adjacent_only = adjacent_only;
        self
    }
}

/// `1`/`true`/`yes` (any case) are true; everything else is false
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}
