use crate::error::FinderError;

/// Expansion steps performed per [`tick`](crate::PathFinder::tick) unless
/// configured otherwise.
pub const DEFAULT_STEP_BUDGET: usize = 100;

/// Tuning knobs for a [`PathFinder`](crate::PathFinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderConfig {
    /// Maximum expansion steps per tick.
    pub step_budget: usize,
    /// Bounded routes strictly shorter than this are delivered without a
    /// wrapped retry. `None` uses half the smaller map dimension.
    pub accept_length: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            step_budget: DEFAULT_STEP_BUDGET,
            accept_length: None,
        }
    }
}

impl FinderConfig {
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = step_budget;
        self
    }

    pub fn with_accept_length(mut self, accept_length: usize) -> Self {
        self.accept_length = Some(accept_length);
        self
    }

    /// Check the configuration without building a finder.
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.step_budget == 0 {
            return Err(FinderError::ZeroStepBudget);
        }
        Ok(())
    }

    /// The acceptance threshold for a `width` x `height` map.
    pub fn accept_length_for(&self, width: i32, height: i32) -> usize {
        self.accept_length
            .unwrap_or_else(|| ((width >> 1).min(height >> 1)).max(0) as usize)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: FinderConfig = serde_json::from_str(r#"{"step_budget": 25}"#).unwrap();
        assert_eq!(cfg.step_budget, 25);
        assert_eq!(cfg.accept_length, None);
    }

    #[test]
    fn config_round_trip() {
        let cfg = FinderConfig::default().with_accept_length(7);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: FinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
