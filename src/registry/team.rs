use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::{debug, info, instrument};

use super::entity::{Entity, EntityKind, fmt_with_children};
use super::ids::IdAllocator;
use super::player::Player;
use super::{read_lock, write_lock};

/// A team within a game, holding uniquely named players.
///
/// Player names are compared case-insensitively, so "justin" and "Justin"
/// are the same player. Player ids come from the registry that created the
/// team's game and are shared with every other team of that registry.
#[derive(Debug)]
pub struct Team {
    entity: Entity,
    ids: Arc<IdAllocator>,
    players: RwLock<Vec<Arc<Player>>>,
}

impl Team {
    pub(crate) fn new(id: u64, name: impl Into<String>, ids: Arc<IdAllocator>) -> Self {
        Self {
            entity: Entity::new(EntityKind::Team, id, name),
            ids,
            players: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> u64 {
        self.entity.id()
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the player called `name`, adding it to the team first if no
    /// player matches case-insensitively.
    #[instrument(skip(self), fields(team_id = self.id()))]
    pub fn add_player(&self, name: &str) -> Arc<Player> {
        let mut players = write_lock(&self.players);

        if let Some(existing) = players
            .iter()
            .find(|player| player.entity().has_name_ignore_case(name))
        {
            debug!(
                "Player already on team: player_id={}, name={}",
                existing.id(),
                existing.name()
            );
            return Arc::clone(existing);
        }

        let player = Arc::new(Player::new(self.ids.next_player_id(), name));
        players.push(Arc::clone(&player));
        info!(
            "Added player: player_id={}, name={}, team={}",
            player.id(),
            player.name(),
            self.name()
        );
        player
    }

    /// Case-insensitive lookup that never adds a player.
    pub fn player_by_name(&self, name: &str) -> Option<Arc<Player>> {
        read_lock(&self.players)
            .iter()
            .find(|player| player.entity().has_name_ignore_case(name))
            .cloned()
    }

    /// Snapshot of the players in the order they were added.
    pub fn players(&self) -> Vec<Arc<Player>> {
        read_lock(&self.players).clone()
    }

    pub fn player_count(&self) -> usize {
        read_lock(&self.players).len()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let players = read_lock(&self.players);
        fmt_with_children(f, &self.entity, "Players", players.as_slice())
    }
}
