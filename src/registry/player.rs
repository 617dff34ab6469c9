use std::fmt;

use super::entity::{Entity, EntityKind};

/// A player on a team. Players have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    entity: Entity,
}

impl Player {
    pub(crate) fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(EntityKind::Player, id, name),
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
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity)
    }
}
