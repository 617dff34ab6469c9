//! Application-wide constants and configuration values
//!
//! This module centralizes identifiers, file names and defaults so the
//! registry, config and logging layers agree on them.

/// First id handed out by every id sequence
pub const FIRST_ENTITY_ID: u64 = 1;

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "gaming_room";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log directory name inside [`APP_DIR_NAME`]
pub const LOG_DIR_NAME: &str = "logs";

/// Log file name used when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "gaming_room.log";

/// Tracing filter directive used when none is configured
pub const DEFAULT_LOG_FILTER: &str = "gaming_room=info";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "GAMING_ROOM_LOG_FILE";

    /// Environment variable for log filter directive override
    pub const LOG_FILTER: &str = "GAMING_ROOM_LOG_FILTER";
}

/// Entity display layout
pub mod display {
    /// Indent before a child listing heading such as `Teams:`
    pub const HEADING_INDENT: &str = "  ";

    /// Indent before each listed child
    pub const CHILD_INDENT: &str = "    ";
}

/// Data created by the program driver
pub mod demo {
    pub const FIRST_GAME: &str = "Game #1";
    pub const SECOND_GAME: &str = "Game #2";

    /// Teams added to the first game, each with the one player added to it
    pub const ROSTER: [(&str, &str); 2] = [("Team Alpha", "Justin"), ("Team Beta", "John")];
}
