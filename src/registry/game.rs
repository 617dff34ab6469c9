use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::{debug, info, instrument};

use super::entity::{Entity, EntityKind, fmt_with_children};
use super::ids::IdAllocator;
use super::team::Team;
use super::{read_lock, write_lock};

/// One game session, holding uniquely named teams.
///
/// Team names are compared case-insensitively. Team ids are drawn from the
/// registry that created the game, so teams of different games never share
/// an id.
#[derive(Debug)]
pub struct Game {
    entity: Entity,
    ids: Arc<IdAllocator>,
    teams: RwLock<Vec<Arc<Team>>>,
}

impl Game {
    pub(crate) fn new(id: u64, name: impl Into<String>, ids: Arc<IdAllocator>) -> Self {
        Self {
            entity: Entity::new(EntityKind::Game, id, name),
            ids,
            teams: RwLock::new(Vec::new()),
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

    /// Returns the team called `name`, adding it to the game first if no team
    /// matches case-insensitively.
    #[instrument(skip(self), fields(game_id = self.id()))]
    pub fn add_team(&self, name: &str) -> Arc<Team> {
        let mut teams = write_lock(&self.teams);

        if let Some(existing) = teams
            .iter()
            .find(|team| team.entity().has_name_ignore_case(name))
        {
            debug!(
                "Team already in game: team_id={}, name={}",
                existing.id(),
                existing.name()
            );
            return Arc::clone(existing);
        }

        let team = Arc::new(Team::new(
            self.ids.next_team_id(),
            name,
            Arc::clone(&self.ids),
        ));
        teams.push(Arc::clone(&team));
        info!(
            "Added team: team_id={}, name={}, game={}",
            team.id(),
            team.name(),
            self.name()
        );
        team
    }

    /// Case-insensitive lookup that never adds a team.
    pub fn team_by_name(&self, name: &str) -> Option<Arc<Team>> {
        read_lock(&self.teams)
            .iter()
            .find(|team| team.entity().has_name_ignore_case(name))
            .cloned()
    }

    /// Snapshot of the teams in the order they were added.
    pub fn teams(&self) -> Vec<Arc<Team>> {
        read_lock(&self.teams).clone()
    }

    pub fn team_count(&self) -> usize {
        read_lock(&self.teams).len()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let teams = read_lock(&self.teams);
        fmt_with_children(f, &self.entity, "Teams", teams.as_slice())
    }
}
