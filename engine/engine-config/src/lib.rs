//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic used by
//! the `solver` binary.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`GAMETREE_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! GAMETREE_<SECTION>_<KEY>=value
//!
//! Examples:
//!     GAMETREE_COMMON_LOG_LEVEL=debug
//!     GAMETREE_SOLVE_GAME=tictactoe
//!     GAMETREE_SOLVE_FIRST=minimizing
//!     GAMETREE_NIM_STACKS=3
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_PATH_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;
