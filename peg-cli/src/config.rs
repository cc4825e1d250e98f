use peg_core::last_peg_number;

/// Errors that can occur when validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board height must be between {min} and {max} (got {height})")]
    HeightOutOfRange {
        height: usize,
        min: usize,
        max: usize,
    },

    #[error("starting peg must be between 1 and {total} (got {peg})")]
    StartOutOfRange { peg: usize, total: usize },
}

/// Settings for a session of games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub height: usize,
    /// Peg removed for the first game instead of asking.
    pub start: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: Self::DEFAULT_HEIGHT,
            start: None,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_HEIGHT: usize = 5;
    pub const MIN_HEIGHT: usize = 3;
    pub const MAX_HEIGHT: usize = 12;

    pub fn total_pegs(&self) -> usize {
        last_peg_number(self.height)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_HEIGHT..=Self::MAX_HEIGHT).contains(&self.height) {
            return Err(ConfigError::HeightOutOfRange {
                height: self.height,
                min: Self::MIN_HEIGHT,
                max: Self::MAX_HEIGHT,
            });
        }
        if let Some(peg) = self.start {
            let total = self.total_pegs();
            if peg == 0 || peg > total {
                return Err(ConfigError::StartOutOfRange { peg, total });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_pegs(), 15);
    }

    #[test]
    fn test_height_range() {
        for height in [0, 2, 13] {
            let config = GameConfig { height, start: None };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::HeightOutOfRange { .. })
            ));
        }
        for height in [3, 12] {
            assert!(GameConfig { height, start: None }.validate().is_ok());
        }
    }

    #[test]
    fn test_start_range() {
        let config = GameConfig {
            height: 4,
            start: Some(11),
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "starting peg must be between 1 and 10 (got 11)"
        );
        assert!(GameConfig { height: 4, start: Some(10) }.validate().is_ok());
        assert!(GameConfig { height: 4, start: Some(0) }.validate().is_err());
    }
}
