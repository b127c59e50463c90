//! Error types.
//!
//! Illegal moves are not errors: they are reported as
//! [`MoveOutcome::Rejected`](crate::rules::MoveOutcome) and leave the state
//! untouched. Errors are reserved for caller contract violations (indices
//! outside 0-8), inconsistent deserialized state, and configuration loading.

use thiserror::Error;

/// Caller contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("sub-board index {0} out of range (expected 0-8)")]
    BoardOutOfRange(usize),

    #[error("cell index {0} out of range (expected 0-8)")]
    CellOutOfRange(usize),
}

/// A deserialized [`GameState`](crate::rules::GameState) that no sequence of
/// legal moves could have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("move #{0} in the history is illegal")]
    IllegalHistory(usize),

    #[error("{0} do not match the move history")]
    HistoryMismatch(&'static str),

    #[error("recorded round result does not match the boards")]
    RoundResultMismatch,
}

/// Failures while loading a [`MatchConfig`](crate::core::MatchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        assert_eq!(
            EngineError::BoardOutOfRange(9).to_string(),
            "sub-board index 9 out of range (expected 0-8)"
        );
        assert_eq!(
            EngineError::CellOutOfRange(12).to_string(),
            "cell index 12 out of range (expected 0-8)"
        );
    }

    #[test]
    fn test_state_error_messages() {
        assert_eq!(
            StateError::IllegalHistory(3).to_string(),
            "move #3 in the history is illegal"
        );
        assert_eq!(
            StateError::HistoryMismatch("outcomes").to_string(),
            "outcomes do not match the move history"
        );
    }

    #[test]
    fn test_config_error_from_parse() {
        let err: ConfigError = toml::from_str::<toml::Table>("players = [")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
