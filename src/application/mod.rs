mod config;
mod game_state;

pub use config::{ConfigError, LifeConfig, MAX_SIDE, Seed};
pub use game_state::GameState;
