//! Registry of games, teams and players
//!
//! The [`Registry`] is the one allocator and directory for the whole object
//! graph: it owns every [`Game`], and every game and team it creates asks it
//! for new ids. Names are deduplicated at each level, so asking for an
//! existing name hands back the existing object instead of a new one.
//!
//! ```
//! use gaming_room::registry::Registry;
//!
//! let registry = Registry::new();
//! let game = registry.add_game("Game #1");
//! let team = game.add_team("Team Alpha");
//! let player = team.add_player("Justin");
//!
//! assert_eq!(game.add_team("team alpha").id(), team.id());
//! assert_eq!(player.to_string(), "Player [id=1, name=Justin]");
//! ```

pub mod entity;
pub mod game;
pub mod ids;
pub mod player;
pub mod team;

use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, instrument};

pub use entity::{Entity, EntityKind};
pub use game::Game;
pub use ids::{IdAllocator, IdSequence};
pub use player::Player;
pub use team::Team;

static INSTANCE: OnceLock<Registry> = OnceLock::new();

// Child lists are append-only, so a writer that panicked cannot leave one
// half-updated and the poisoned data is safe to keep using.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Directory of games and allocator of game, team and player ids.
///
/// Use [`Registry::instance`] for the process-wide registry. [`Registry::new`]
/// builds an independent one with its own id sequences, which is mostly
/// useful in tests.
#[derive(Debug)]
pub struct Registry {
    ids: Arc<IdAllocator>,
    games: RwLock<Vec<Arc<Game>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            ids: Arc::new(IdAllocator::new()),
            games: RwLock::new(Vec::new()),
        }
    }

    /// Returns the process-wide registry, creating it on first access.
    pub fn instance() -> &'static Registry {
        Self::instance_or_create().0
    }

    /// Like [`Registry::instance`], also reporting whether this call was the
    /// one that created the registry.
    pub fn instance_or_create() -> (&'static Registry, bool) {
        let mut created = false;
        let instance = INSTANCE.get_or_init(|| {
            created = true;
            info!(">>> Singleton Registry instance CREATED");
            Registry::new()
        });
        (instance, created)
    }

    /// Whether `self` is the process-wide registry.
    ///
    /// Does not create the process-wide registry if it does not exist yet.
    pub fn is_instance(&self) -> bool {
        INSTANCE
            .get()
            .is_some_and(|instance| std::ptr::eq(instance, self))
    }

    /// Returns the game called exactly `name`, creating it if there is none.
    ///
    /// Game names are matched case-sensitively, unlike team and player names.
    #[instrument(skip(self))]
    pub fn add_game(&self, name: &str) -> Arc<Game> {
        let mut games = write_lock(&self.games);

        if let Some(existing) = games.iter().find(|game| game.entity().has_name(name)) {
            debug!(
                "Game already registered: game_id={}, name={}",
                existing.id(),
                existing.name()
            );
            return Arc::clone(existing);
        }

        let game = Arc::new(Game::new(
            self.ids.next_game_id(),
            name,
            Arc::clone(&self.ids),
        ));
        games.push(Arc::clone(&game));
        info!(
            "Registered game: game_id={}, name={}, game_count={}",
            game.id(),
            game.name(),
            games.len()
        );
        game
    }

    pub fn game_by_id(&self, id: u64) -> Option<Arc<Game>> {
        read_lock(&self.games)
            .iter()
            .find(|game| game.id() == id)
            .cloned()
    }

    /// Case-sensitive lookup that never creates a game.
    pub fn game_by_name(&self, name: &str) -> Option<Arc<Game>> {
        read_lock(&self.games)
            .iter()
            .find(|game| game.entity().has_name(name))
            .cloned()
    }

    /// Returns the game at `index` in registration order.
    pub fn game_at(&self, index: usize) -> Option<Arc<Game>> {
        read_lock(&self.games).get(index).cloned()
    }

    /// Snapshot of all games in registration order.
    pub fn games(&self) -> Vec<Arc<Game>> {
        read_lock(&self.games).clone()
    }

    pub fn game_count(&self) -> usize {
        read_lock(&self.games).len()
    }

    pub fn next_team_id(&self) -> u64 {
        self.ids.next_team_id()
    }

    pub fn next_player_id(&self) -> u64 {
        self.ids.next_player_id()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
