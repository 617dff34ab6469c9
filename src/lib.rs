//! Gaming Room registry library
//!
//! This library keeps an in-memory directory of games, each holding uniquely
//! named teams, each holding uniquely named players. A single registry hands
//! out ids for all three kinds and deduplicates names at each level.
//!
//! # Examples
//!
//! ```rust
//! use gaming_room::Registry;
//!
//! let registry = Registry::instance();
//! let game = registry.add_game("Game #1");
//! let alpha = game.add_team("Team Alpha");
//! alpha.add_player("Justin");
//!
//! // Team and player names ignore case, game names do not
//! assert_eq!(game.add_team("TEAM ALPHA").id(), alpha.id());
//! assert!(registry.game_by_name("game #1").is_none());
//!
//! println!("{game}");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod registry;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use registry::{Entity, EntityKind, Game, Player, Registry, Team};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
