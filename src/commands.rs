use crate::cli::Args;
use crate::config::Config;
use crate::constants::demo;
use crate::error::AppError;
use crate::registry::Registry;
use std::io::Write;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "{} {}", crate::NAME, crate::VERSION)?;
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file, --set-log-filter).
///
/// Applies the requested changes to the stored config file, or to the defaults
/// when there is none yet. A config file that cannot be read or parsed is
/// reported and left untouched.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    if update_config_file(&Config::get_config_path(), args).await? {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Loads the config stored at `path`, applies the changes in `args`,
/// validates and saves it back to `path`.
///
/// Returns true if a custom log file path was cleared.
pub async fn update_config_file(path: &str, args: &Args) -> Result<bool, AppError> {
    let mut config = Config::load_stored_or_default(path).await?;
    let cleared = apply_config_update(&mut config, args);

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(cleared)
}

/// Applies the config changes requested in `args`.
///
/// Returns true if a custom log file path was cleared.
pub fn apply_config_update(config: &mut Config, args: &Args) -> bool {
    let mut cleared = false;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        cleared = true;
    }

    if let Some(new_filter) = &args.new_log_filter {
        config.log_filter = new_filter.clone();
    }

    cleared
}

/// Returns the process-wide registry, announcing on `out` when this call
/// creates it.
pub fn obtain_registry<W: Write>(out: &mut W) -> Result<&'static Registry, AppError> {
    let (registry, created) = Registry::instance_or_create();
    if created {
        writeln!(out, ">>> Singleton Registry instance CREATED")?;
    }
    Ok(registry)
}

/// Populates `registry` with the demo data, printing each entity as it is created.
///
/// Two games are created; the first one gets one team per roster entry, each
/// with a single player.
pub fn run_demo<W: Write>(registry: &Registry, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\nAbout to test initializing game data...")?;

    let first_game = registry.add_game(demo::FIRST_GAME);
    writeln!(out, "{first_game}")?;
    let second_game = registry.add_game(demo::SECOND_GAME);
    writeln!(out, "{second_game}")?;

    for (team_name, player_name) in demo::ROSTER {
        let team = first_game.add_team(team_name);
        let player = team.add_player(player_name);
        writeln!(out, "{team}")?;
        writeln!(out, "{player}")?;
    }

    info!(
        "Demo data initialized: game_count={}",
        registry.game_count()
    );
    Ok(())
}

/// Creates or fetches each named game and prints it.
pub fn add_named_games<W: Write>(
    registry: &Registry,
    names: &[String],
    out: &mut W,
) -> Result<(), AppError> {
    for name in names {
        let game = registry.add_game(name);
        writeln!(out, "{game}")?;
    }
    writeln!(out, "Game count: {}", registry.game_count())?;
    Ok(())
}

/// Fetches the process-wide registry twice and reports whether both
/// references denote the same instance.
pub fn run_singleton_check<W: Write>(out: &mut W) -> Result<bool, AppError> {
    writeln!(out, "\nAbout to test the singleton...")?;

    let first = Registry::instance();
    let second = Registry::instance();
    let shared = std::ptr::eq(first, second);

    writeln!(out, "Testing singleton instance again: Registry@{second:p}")?;
    writeln!(out, "Registry instance is shared: {shared}")?;

    info!("Singleton check finished: shared={shared}");
    Ok(shared)
}
