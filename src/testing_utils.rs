use crate::registry::{Game, Registry};
use std::sync::Arc;

/// Test utilities for building populated registries
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a fresh registry holding the demo data:
    /// "Game #1" with "Team Alpha" (Justin) and "Team Beta" (John), plus an empty "Game #2"
    pub fn create_demo_registry() -> Registry {
        let registry = Registry::new();
        let game = registry.add_game("Game #1");
        registry.add_game("Game #2");
        game.add_team("Team Alpha").add_player("Justin");
        game.add_team("Team Beta").add_player("John");
        registry
    }

    /// Creates a fresh registry with one empty game per name
    pub fn create_registry_with_games(names: &[&str]) -> Registry {
        let registry = Registry::new();
        for name in names {
            registry.add_game(name);
        }
        registry
    }

    /// Adds a team with the given players to `game`
    pub fn add_team_with_players(game: &Game, team: &str, players: &[&str]) {
        let team = game.add_team(team);
        for player in players {
            team.add_player(player);
        }
    }

    /// Creates or fetches `name` in `registry` and fills it with `teams`
    pub fn create_game_with_roster(
        registry: &Registry,
        name: &str,
        teams: &[(&str, &[&str])],
    ) -> Arc<Game> {
        let game = registry.add_game(name);
        for (team, players) in teams {
            Self::add_team_with_players(&game, team, players);
        }
        game
    }
}
