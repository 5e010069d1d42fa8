use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::bot_controller::DEFAULT_INTERMEDIATE_DEPTH;
use super::types::Difficulty;

const MAX_SEARCH_DEPTH: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    pub intermediate_depth: usize,
    pub seed: Option<u64>,
}

impl TicTacToeSessionSettings {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            intermediate_depth: DEFAULT_INTERMEDIATE_DEPTH,
            seed: None,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.intermediate_depth == 0 {
            return Err("intermediate_depth must be at least 1".to_string());
        }
        if self.intermediate_depth > MAX_SEARCH_DEPTH {
            return Err(format!(
                "intermediate_depth ({}) cannot exceed {}",
                self.intermediate_depth, MAX_SEARCH_DEPTH
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSessionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.intermediate_depth, 3);
    }

    #[test]
    fn test_depth_bounds() {
        let zero = TicTacToeSessionSettings {
            intermediate_depth: 0,
            ..TicTacToeSessionSettings::default()
        };
        assert!(zero.validate().is_err());

        let too_deep = TicTacToeSessionSettings {
            intermediate_depth: 10,
            ..TicTacToeSessionSettings::default()
        };
        assert!(too_deep.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let settings: TicTacToeSessionSettings =
            serde_yaml_ng::from_str("difficulty: easy\n").unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.intermediate_depth, DEFAULT_INTERMEDIATE_DEPTH);
        assert_eq!(settings.seed, None);

        let settings: TicTacToeSessionSettings =
            serde_yaml_ng::from_str("seed: 8\n").unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, Some(8));
    }
}
