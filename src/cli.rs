use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Gaming Room registry driver
///
/// Creates two games through the shared registry, adds teams and players to
/// the first one and prints every entity as it is created. Afterwards the
/// registry is fetched a second time to show that both references point at
/// the same instance.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Additional game to create or fetch after the demo data. Can be repeated.
    /// Names are matched exactly, so asking for an existing game prints it unchanged.
    #[arg(long = "game", short = 'g', value_name = "NAME", help_heading = "Registry")]
    pub games: Vec<String>,

    /// Only initialize the demo data; skip the singleton identity check.
    #[arg(long = "skip-singleton-check", help_heading = "Registry")]
    pub skip_singleton_check: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Update the log filter directive in config, e.g. "gaming_room=debug".
    #[arg(long = "set-log-filter", value_name = "DIRECTIVES", help_heading = "Configuration")]
    pub new_log_filter: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write log events to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run. If not provided, logs will be
    /// written to the configured or default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Whether any option that rewrites the config file was given
    pub fn is_config_update(&self) -> bool {
        self.new_log_file_path.is_some()
            || self.clear_log_file_path
            || self.new_log_filter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["gaming_room"]).unwrap();
        assert!(args.games.is_empty());
        assert!(!args.skip_singleton_check);
        assert!(!args.is_config_update());
        assert!(!args.debug);
    }

    #[test]
    fn test_parse_repeated_games() {
        let args =
            Args::try_parse_from(["gaming_room", "--game", "Game #3", "-g", "Game #1"]).unwrap();
        assert_eq!(args.games, vec!["Game #3", "Game #1"]);
    }

    #[test]
    fn test_config_update_detection() {
        let args = Args::try_parse_from(["gaming_room", "--set-log-filter", "gaming_room=debug"])
            .unwrap();
        assert!(args.is_config_update());

        let args = Args::try_parse_from(["gaming_room", "--clear-log-file"]).unwrap();
        assert!(args.is_config_update());
    }
}
