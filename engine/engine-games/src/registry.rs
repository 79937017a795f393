//! Global game registry
//!
//! Maps game ids to factories that build an erased game from
//! [`SolveParams`]. Registration normally happens once at startup through
//! [`register_all_games`](crate::register_all_games).

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::erased::{ErasedGame, GameError, SolveParams};

/// Factory function type for creating game instances
pub type GameFactory = fn(&SolveParams) -> Result<Box<dyn ErasedGame>, GameError>;

/// Thread-safe registry mapping game id to factory
static REGISTRY: Lazy<Mutex<HashMap<String, GameFactory>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Factories never run while the lock is held, so a poisoned map is still
/// consistent.
fn registry() -> MutexGuard<'static, HashMap<String, GameFactory>> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Register a game with the global registry.
///
/// Registering an id twice replaces the earlier factory.
pub fn register_game(id: impl Into<String>, factory: GameFactory) {
    let id = id.into();
    let mut registry = registry();
    if registry.contains_key(&id) {
        warn!(game = %id, "Overriding existing game registration");
    }
    registry.insert(id, factory);
}

/// Create a game by id from the given parameters.
///
/// # Errors
///
/// Returns `GameError::UnknownGame` for an unregistered id, or whatever the
/// game's factory reports for unusable parameters.
pub fn create_game(id: &str, params: &SolveParams) -> Result<Box<dyn ErasedGame>, GameError> {
    // Copy the factory out so it runs without the lock.
    let factory = registry().get(id).copied();
    match factory {
        Some(factory) => factory(params),
        None => {
            warn!(game = %id, "Attempted to create unregistered game");
            Err(GameError::UnknownGame(id.to_string()))
        }
    }
}

/// All registered game ids, sorted
pub fn list_registered_games() -> Vec<String> {
    let mut ids: Vec<String> = registry().keys().cloned().collect();
    ids.sort();
    ids
}

/// Check if a game is registered
pub fn is_registered(id: &str) -> bool {
    registry().contains_key(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::GameAdapter;
    use engine_core::Side;
    use games_nim::NimState;

    fn small_nim(params: &SolveParams) -> Result<Box<dyn ErasedGame>, GameError> {
        Ok(Box::new(GameAdapter::new(
            NimState::with_stacks(vec![1], params.first),
            games_nim::metadata(),
        )))
    }

    fn failing(_params: &SolveParams) -> Result<Box<dyn ErasedGame>, GameError> {
        Err(GameError::InvalidParams {
            game: "failing".to_string(),
            reason: "always".to_string(),
        })
    }

    #[test]
    fn test_register_and_create() {
        register_game("registry-test-small-nim", small_nim);

        assert!(is_registered("registry-test-small-nim"));
        assert!(list_registered_games().contains(&"registry-test-small-nim".to_string()));

        let params = SolveParams::default().with_first(Side::Minimizing);
        let game = create_game("registry-test-small-nim", &params).unwrap();
        let analysis = game.analyze(false).unwrap();
        assert_eq!(analysis.first, Side::Minimizing);
        assert_eq!(analysis.size, 2);
    }

    #[test]
    fn test_unknown_game() {
        let err = create_game("registry-test-missing", &SolveParams::default()).unwrap_err();
        assert!(matches!(err, GameError::UnknownGame(ref id) if id == "registry-test-missing"));
        assert!(!is_registered("registry-test-missing"));
    }

    #[test]
    fn test_factory_error_is_returned() {
        register_game("registry-test-failing", failing);
        let err = create_game("registry-test-failing", &SolveParams::default()).unwrap_err();
        assert!(matches!(err, GameError::InvalidParams { .. }));
    }

    #[test]
    fn test_override_registration() {
        register_game("registry-test-override", failing);
        register_game("registry-test-override", small_nim);

        assert!(create_game("registry-test-override", &SolveParams::default()).is_ok());
        let count = list_registered_games()
            .iter()
            .filter(|id| *id == "registry-test-override")
            .count();
        assert_eq!(count, 1);
    }
}
