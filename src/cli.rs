use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args as ClapArgs, Parser, Subcommand};

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

/// Returns true when any configuration flag was given.
/// Configuration operations run instead of a view.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_base_url.is_some()
        || args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Football data viewer
///
/// Browse leagues, teams and their matches from a football-data.org style API.
/// Without a subcommand the list of leagues is shown.
///
/// In interactive mode (--interactive):
/// - Use arrow keys (←/→) to move between pages
/// - Press 'r' to fetch the data again
/// - Press 'q' to quit
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Open the view in a keyboard driven pager instead of printing it once.
    #[arg(short = 'i', long = "interactive", global = true, help_heading = "Display Options")]
    pub interactive: bool,

    /// Disable colors in the output.
    #[arg(short = 'p', long = "plain", global = true, help_heading = "Display Options")]
    pub plain: bool,

    /// Update the API base URL in config.
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub new_base_url: Option<String>,

    /// Update the API key in config.
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print log output to the terminal (ignored in interactive mode).
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List leagues
    Leagues(SearchArgs),
    /// List the matches of one league
    League(EntityArgs),
    /// List teams
    Teams(SearchArgs),
    /// Show one team and its matches
    Team(EntityArgs),
}

#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Case-insensitive search over name and country
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityArgs {
    /// League code or numeric id (e.g. PL or 2021), or team id
    pub id: String,

    /// First day of the date range, YYYY-MM-DD. Needs --to as well.
    #[arg(long = "from", value_name = "DATE")]
    pub date_from: Option<String>,

    /// Last day of the date range, YYYY-MM-DD. Needs --from as well.
    #[arg(long = "to", value_name = "DATE")]
    pub date_to: Option<String>,

    /// Match status, e.g. SCHEDULED, LIVE, FINISHED, POSTPONED, CANCELED
    #[arg(long)]
    pub status: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_command() {
        let args = Args::try_parse_from(["football_data_viewer"]).unwrap();
        assert_eq!(args.command, None);
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_league_command_with_filter() {
        let args = Args::try_parse_from([
            "football_data_viewer",
            "league",
            "PL",
            "--from",
            "2024-01-01",
            "--to",
            "2024-01-31",
            "--status",
            "finished",
            "--page",
            "2",
            "-p",
        ])
        .unwrap();

        assert!(args.plain);
        let Some(Command::League(entity)) = args.command else {
            panic!("expected league command");
        };
        assert_eq!(entity.id, "PL");
        assert_eq!(entity.date_from.as_deref(), Some("2024-01-01"));
        assert_eq!(entity.date_to.as_deref(), Some("2024-01-31"));
        assert_eq!(entity.status.as_deref(), Some("finished"));
        assert_eq!(entity.page, 2);
    }

    #[test]
    fn test_teams_search() {
        let args =
            Args::try_parse_from(["football_data_viewer", "-i", "teams", "--search", "arse"])
                .unwrap();
        assert!(args.interactive);
        assert_eq!(
            args.command,
            Some(Command::Teams(SearchArgs {
                search: Some("arse".to_string()),
                page: 1,
            }))
        );
    }

    #[test]
    fn test_config_operations() {
        let args = Args::try_parse_from(["football_data_viewer", "--set-api-key", "abc"]).unwrap();
        assert!(is_config_operation(&args));

        let args = Args::try_parse_from(["football_data_viewer", "-l"]).unwrap();
        assert!(is_config_operation(&args));
    }

    #[test]
    fn test_team_requires_id() {
        assert!(Args::try_parse_from(["football_data_viewer", "team"]).is_err());
    }
}
