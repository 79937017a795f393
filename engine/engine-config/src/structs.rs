//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_game() -> String {
    defaults::game().into()
}
fn d_first() -> String {
    defaults::first().into()
}
fn d_verify() -> bool {
    defaults::verify()
}
fn d_stacks() -> usize {
    defaults::nim_stacks()
}
fn d_max_take() -> u32 {
    defaults::nim_max_take()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub solve: SolveConfig,
    #[serde(default)]
    pub nim: NimConfig,
}

/// Settings shared by every entry point
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Which game to solve and from whose turn
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SolveConfig {
    /// Registered game id
    #[serde(default = "d_game")]
    pub game: String,
    /// Side to move at the start, parsed by the binary
    #[serde(default = "d_first")]
    pub first: String,
    #[serde(default = "d_verify")]
    pub verify: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            game: defaults::game().into(),
            first: defaults::first().into(),
            verify: defaults::verify(),
        }
    }
}

/// Starting position for Nim
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NimConfig {
    /// Stack i (1-based) starts with i objects
    #[serde(default = "d_stacks")]
    pub stacks: usize,
    #[serde(default = "d_max_take")]
    pub max_take: u32,
}

impl Default for NimConfig {
    fn default() -> Self {
        Self {
            stacks: defaults::nim_stacks(),
            max_take: defaults::nim_max_take(),
        }
    }
}
