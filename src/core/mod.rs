//! Core types: players, positions, errors, configuration.

pub mod player;
pub mod position;
pub mod error;
pub mod config;

pub use player::{Mark, Player};
pub use position::{BoardId, CellId, Move, MoveRecord, GRID_SIZE};
pub use error::{ConfigError, EngineError, StateError};
pub use config::{
    apply_env_overrides, apply_overrides, load_config, load_config_with, load_from_path,
    MatchConfig, PlayerNames,
};
