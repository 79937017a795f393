//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so the binary runs without
//! any config file present.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    solve: SolveDefaults,
    nim: NimDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SolveDefaults {
    game: String,
    first: String,
    verify: bool,
}

#[derive(Debug, Deserialize)]
struct NimDefaults {
    stacks: usize,
    max_take: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Solve
pub fn game() -> &'static str {
    &DEFAULTS.solve.game
}
pub fn first() -> &'static str {
    &DEFAULTS.solve.first
}
pub fn verify() -> bool {
    DEFAULTS.solve.verify
}

// Nim
pub fn nim_stacks() -> usize {
    DEFAULTS.nim.stacks
}
pub fn nim_max_take() -> u32 {
    DEFAULTS.nim.max_take
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        // Just accessing these will verify the TOML parses correctly
        assert_eq!(log_level(), "info");
        assert_eq!(game(), "nim");
        assert_eq!(first(), "maximizing");
        assert!(!verify());
    }

    #[test]
    fn test_nim_defaults() {
        assert_eq!(nim_stacks(), 2);
        assert_eq!(nim_max_take(), 3);
    }
}
