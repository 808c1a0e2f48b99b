// Mon Jan 19 2026 - Alex

use crate::structure::ReflectError;
use crate::utils::hash::GOLDEN_RATIO_32;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Nesting limit for composites and sequences. `None` walks the full depth.
    pub max_depth: Option<usize>,
    /// Treat a re-entered `(x, y)` pair as equal instead of recursing forever.
    pub equality_cycle_guard: bool,
    /// Contribution of a re-entered node to the structural hash.
    pub cycle_sentinel: i32,
    /// Keep per-type member lists in the shared metadata cache.
    pub cache_members: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            equality_cycle_guard: true,
            cycle_sentinel: GOLDEN_RATIO_32,
            cache_members: true,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_equality_cycle_guard(mut self, enabled: bool) -> Self {
        self.equality_cycle_guard = enabled;
        self
    }

    pub fn with_cycle_sentinel(mut self, sentinel: i32) -> Self {
        self.cycle_sentinel = sentinel;
        self
    }

    pub fn with_member_cache(mut self, enabled: bool) -> Self {
        self.cache_members = enabled;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ReflectError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ReflectError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReflectError> {
        if self.max_depth == Some(0) {
            return Err(ReflectError::InvalidConfig(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        if self.cycle_sentinel == 0 {
            return Err(ReflectError::InvalidConfig(
                "cycle_sentinel must differ from the null hash".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether entering one more nested level at `depth` is allowed.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}
