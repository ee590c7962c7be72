use crate::app::{StatusLineNotifier, run_interactive};
use crate::cli::{Args, Command, SearchArgs};
use crate::config::Config;
use crate::data_fetcher::FootballApi;
use crate::error::AppError;
use crate::notify::TerminalNotifier;
use crate::ui::Screen;
use crossterm::{execute, terminal::SetTitle};
use std::io::{IsTerminal, stdout};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies the configuration flags of `args` to `config`.
///
/// Returns one confirmation line per change.
pub fn apply_config_updates(config: &mut Config, args: &Args) -> Vec<String> {
    let mut changes = Vec::new();

    if let Some(base_url) = &args.new_base_url {
        config.api_base_url = base_url.trim().to_string();
        changes.push(format!("API base URL set to {}", config.api_base_url));
    }

    if let Some(api_key) = &args.new_api_key {
        config.api_key = api_key.trim().to_string();
        changes.push("API key updated".to_string());
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
        changes.push(format!("Log file path set to {new_log_path}"));
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        changes.push("Custom log file path cleared. Using default location.".to_string());
    }

    changes
}

/// Handles configuration update commands (--set-base-url, --set-api-key,
/// --set-log-file, --clear-log-file).
///
/// Only the stored file is updated; environment overrides are not written back.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    for change in apply_config_updates(&mut config, args) {
        println!("{change}");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// The subcommand to run; the league list when none was given.
pub fn effective_command(args: &Args) -> Command {
    args.command.clone().unwrap_or(Command::Leagues(SearchArgs {
        search: None,
        page: 1,
    }))
}

fn requested_page(command: &Command) -> usize {
    match command {
        Command::Leagues(a) | Command::Teams(a) => a.page,
        Command::League(a) | Command::Team(a) => a.page,
    }
}

/// Shows the requested view, once or in the interactive pager.
pub async fn handle_view_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let command = effective_command(args);
    let screen = Screen::from_command(&command)?;
    let page = requested_page(&command);
    let plain = args.plain || !stdout().is_terminal();

    info!("Showing {:?}", command);

    if args.interactive {
        let notifier = Arc::new(StatusLineNotifier::default());
        let api = Arc::new(FootballApi::new(config, notifier.clone())?);
        return run_interactive(screen, api, notifier, plain, page).await;
    }

    let api = Arc::new(FootballApi::new(
        config,
        Arc::new(TerminalNotifier::new(plain)),
    )?);
    handle_once(screen, api, plain, page).await
}

async fn handle_once(
    mut screen: Screen,
    api: Arc<FootballApi>,
    plain: bool,
    page: usize,
) -> Result<(), AppError> {
    screen.load(api).await;
    screen.set_page(page);

    let mut out = stdout();
    if !plain {
        execute!(out, SetTitle(screen.title()))?;
    }
    screen.render(plain, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        let mut full = vec!["football_data_viewer"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_default_command_is_leagues() {
        assert_eq!(
            effective_command(&parse(&[])),
            Command::Leagues(SearchArgs {
                search: None,
                page: 1
            })
        );
    }

    #[test]
    fn test_requested_page() {
        assert_eq!(requested_page(&effective_command(&parse(&["team", "57", "--page", "4"]))), 4);
        assert_eq!(requested_page(&effective_command(&parse(&["teams"]))), 1);
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config::default();
        let changes = apply_config_updates(
            &mut config,
            &parse(&[
                "--set-base-url",
                " https://api.example.com/v4 ",
                "--set-api-key",
                "secret",
                "--set-log-file",
                "/tmp/fdv.log",
            ]),
        );

        assert_eq!(changes.len(), 3);
        assert_eq!(config.api_base_url, "https://api.example.com/v4");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/fdv.log"));
        assert!(changes.iter().all(|c| !c.contains("secret")));
    }

    #[test]
    fn test_clear_log_file() {
        let mut config = Config {
            log_file_path: Some("/tmp/old.log".to_string()),
            ..Config::default()
        };
        let changes = apply_config_updates(&mut config, &parse(&["--clear-log-file"]));
        assert_eq!(config.log_file_path, None);
        assert_eq!(changes.len(), 1);
    }
}
