//! Identity shape shared by games, teams and players

use std::fmt;

use crate::constants::display::{CHILD_INDENT, HEADING_INDENT};

/// Which kind of object an [`Entity`] identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Game,
    Team,
    Player,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Game => "Game",
            EntityKind::Team => "Team",
            EntityKind::Player => "Player",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Id and display name of a registry object.
///
/// Entities are only built by the registry and by their parent, which is
/// what keeps ids unique. There are no setters: an id never changes after
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    id: u64,
    name: String,
}

impl Entity {
    pub(crate) fn new(kind: EntityKind, id: u64, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exact, case-sensitive name comparison.
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Case-insensitive name comparison of each character pair, so "ſam"
    /// matches "sam" and "ΟΔΟΣ" matches "οδος".
    pub fn has_name_ignore_case(&self, name: &str) -> bool {
        names_equal_ignore_case(&self.name, name)
    }
}

/// Formats as `<Kind> [id=<id>, name=<name>]`.
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [id={}, name={}]", self.kind, self.id, self.name)
    }
}

/// Compares names character by character. Both names must have the same
/// number of characters, and each pair must match exactly, by uppercase
/// mapping, or by lowercase mapping.
pub(crate) fn names_equal_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars()
            .zip(b.chars())
            .all(|(x, y)| chars_equal_ignore_case(x, y))
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

/// Writes `entity` followed by an indented listing of `children`.
///
/// Nothing but the entity line is written when there are no children. Each
/// child's representation is written as-is, so multi-line children keep their
/// own indentation.
pub(crate) fn fmt_with_children<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    entity: &Entity,
    heading: &str,
    children: &[T],
) -> fmt::Result {
    write!(f, "{entity}")?;
    if !children.is_empty() {
        write!(f, "\n{HEADING_INDENT}{heading}:")?;
        for child in children {
            write!(f, "\n{CHILD_INDENT}{child}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parent {
        entity: Entity,
        children: Vec<Entity>,
    }

    impl fmt::Display for Parent {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_with_children(f, &self.entity, "Players", self.children.as_slice())
        }
    }

    #[test]
    fn test_entity_display() {
        let entity = Entity::new(EntityKind::Game, 1, "Game #1");
        assert_eq!(entity.to_string(), "Game [id=1, name=Game #1]");

        let entity = Entity::new(EntityKind::Player, 42, "Justin");
        assert_eq!(entity.to_string(), "Player [id=42, name=Justin]");
    }

    #[test]
    fn test_entity_accessors() {
        let entity = Entity::new(EntityKind::Team, 7, "Team Alpha");
        assert_eq!(entity.kind(), EntityKind::Team);
        assert_eq!(entity.id(), 7);
        assert_eq!(entity.name(), "Team Alpha");
    }

    #[test]
    fn test_has_name_is_case_sensitive() {
        let entity = Entity::new(EntityKind::Game, 1, "Game #1");
        assert!(entity.has_name("Game #1"));
        assert!(!entity.has_name("game #1"));
    }

    #[test]
    fn test_has_name_ignore_case() {
        let entity = Entity::new(EntityKind::Team, 1, "Team Alpha");
        assert!(entity.has_name_ignore_case("team alpha"));
        assert!(entity.has_name_ignore_case("TEAM ALPHA"));
        assert!(!entity.has_name_ignore_case("Team Alph"));
        assert!(!entity.has_name_ignore_case("Team Alpha "));
    }

    #[test]
    fn test_names_equal_ignore_case_non_ascii() {
        assert!(names_equal_ignore_case("Kärpät", "KÄRPÄT"));
        assert!(names_equal_ignore_case("", ""));
        assert!(!names_equal_ignore_case("Ässät", "Assat"));
    }

    #[test]
    fn test_names_equal_ignore_case_by_uppercase_mapping() {
        // Long s and final sigma only meet in their uppercase forms
        assert!(names_equal_ignore_case("ſam", "sam"));
        assert!(names_equal_ignore_case("ΟΔΟΣ", "οδος"));
        assert!(names_equal_ignore_case("οδος", "οδοσ"));
    }

    #[test]
    fn test_names_equal_ignore_case_requires_same_length() {
        assert!(!names_equal_ignore_case("ß", "SS"));
        assert!(!names_equal_ignore_case("straße", "STRASSE"));
        assert!(!names_equal_ignore_case("Team", "Team "));
    }

    #[test]
    fn test_fmt_with_children_lists_children() {
        let parent = Parent {
            entity: Entity::new(EntityKind::Team, 1, "Team Alpha"),
            children: vec![
                Entity::new(EntityKind::Player, 1, "Justin"),
                Entity::new(EntityKind::Player, 3, "Mia"),
            ],
        };
        assert_eq!(
            parent.to_string(),
            concat!(
                "Team [id=1, name=Team Alpha]\n",
                "  Players:\n",
                "    Player [id=1, name=Justin]\n",
                "    Player [id=3, name=Mia]",
            )
        );
    }

    #[test]
    fn test_fmt_with_children_without_children() {
        let parent = Parent {
            entity: Entity::new(EntityKind::Team, 2, "Team Beta"),
            children: Vec::new(),
        };
        assert_eq!(parent.to_string(), "Team [id=2, name=Team Beta]");
    }
}
