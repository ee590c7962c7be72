//! The four screens of the viewer and how each one fetches its data.
//!
//! A screen only describes the fetch; the caller decides whether to await it
//! in place (one-shot output) or to spawn it (interactive pager). Results come
//! back as a [`FetchOutcome`] and pass the view's ticket check on apply.

use crate::cli::{Command, EntityArgs, SearchArgs};
use crate::data_fetcher::FootballApi;
use crate::data_fetcher::filter::Filter;
use crate::data_fetcher::models::{Competition, Listing, Match, Team};
use crate::error::AppError;
use std::future::Future;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{info, warn};

use super::list_view::{FetchTicket, ListConfig, ListView};
use super::render::{CompetitionRow, MatchRow, TeamRow, render_list, render_team_header};

pub enum Screen {
    Competitions {
        view: ListView<Competition>,
    },
    CompetitionMatches {
        competition_id: String,
        view: ListView<Match>,
    },
    Teams {
        view: ListView<Team>,
    },
    TeamMatches {
        team_id: String,
        team: Option<Team>,
        view: ListView<Match>,
    },
}

/// Result of a screen fetch, tagged with the ticket it was started with.
pub enum FetchOutcome {
    Competitions(FetchTicket, Result<Listing<Competition>, AppError>),
    Matches(FetchTicket, Result<Listing<Match>, AppError>),
    Teams(FetchTicket, Result<Listing<Team>, AppError>),
    /// Team detail and its matches; fails as a whole when either request fails.
    TeamMatches(FetchTicket, Result<(Team, Listing<Match>), AppError>),
}

fn filter_from_args(args: &EntityArgs) -> Result<Filter, AppError> {
    Filter::from_inputs(
        args.date_from.as_deref().unwrap_or_default(),
        args.date_to.as_deref().unwrap_or_default(),
        args.status.as_deref().unwrap_or_default(),
    )
}

fn search_view<T>(config: ListConfig<T>, args: &SearchArgs) -> ListView<T> {
    let mut view = ListView::new(config);
    if let Some(search) = &args.search {
        view.set_search(search.as_str());
    }
    view
}

fn match_view(
    config: ListConfig<Match>,
    args: &EntityArgs,
) -> Result<ListView<Match>, AppError> {
    let mut view = ListView::new(config);
    view.set_filter(filter_from_args(args)?);
    Ok(view)
}

impl Screen {
    /// Builds the screen for a subcommand with its filter and search applied.
    ///
    /// # Errors
    /// `AppError::DateTimeParse` when a date argument is not `YYYY-MM-DD`.
    pub fn from_command(command: &Command) -> Result<Self, AppError> {
        Ok(match command {
            Command::Leagues(args) => Screen::Competitions {
                view: search_view(ListConfig::competitions(), args),
            },
            Command::Teams(args) => Screen::Teams {
                view: search_view(ListConfig::teams(), args),
            },
            Command::League(args) => Screen::CompetitionMatches {
                competition_id: args.id.clone(),
                view: match_view(
                    ListConfig {
                        error_text: "Ошибка при загрузке матчей лиги",
                        ..ListConfig::matches(format!("Матчи лиги {}", args.id))
                    },
                    args,
                )?,
            },
            Command::Team(args) => Screen::TeamMatches {
                team_id: args.id.clone(),
                team: None,
                view: match_view(
                    ListConfig {
                        error_text: "Ошибка при загрузке данных команды",
                        ..ListConfig::matches("Матчи команды")
                    },
                    args,
                )?,
            },
        })
    }

    /// Starts a fetch for the current filter.
    ///
    /// Returns `None` when the filter gate skips the fetch.
    pub fn fetch_task(
        &mut self,
        api: Arc<FootballApi>,
    ) -> Option<impl Future<Output = FetchOutcome> + Send + 'static> {
        let task = match self {
            Screen::Competitions { view } => {
                let ticket = view.begin_fetch()?;
                FetchTask::Competitions(ticket)
            }
            Screen::Teams { view } => {
                let ticket = view.begin_fetch()?;
                FetchTask::Teams(ticket)
            }
            Screen::CompetitionMatches {
                competition_id,
                view,
            } => {
                let ticket = view.begin_fetch()?;
                FetchTask::CompetitionMatches(ticket, competition_id.clone())
            }
            Screen::TeamMatches { team_id, view, .. } => {
                let ticket = view.begin_fetch()?;
                FetchTask::TeamMatches(ticket, team_id.clone())
            }
        };
        Some(task.run(api))
    }

    /// Applies a finished fetch. Stale or mismatched outcomes are ignored.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match (self, outcome) {
            (Screen::Competitions { view }, FetchOutcome::Competitions(ticket, result)) => {
                view.complete(ticket, result);
            }
            (Screen::Teams { view }, FetchOutcome::Teams(ticket, result)) => {
                view.complete(ticket, result);
            }
            (Screen::CompetitionMatches { view, .. }, FetchOutcome::Matches(ticket, result)) => {
                view.complete(ticket, result);
            }
            (
                Screen::TeamMatches { team, view, .. },
                FetchOutcome::TeamMatches(ticket, result),
            ) => {
                let (detail, matches) = match result {
                    Ok((detail, matches)) => (Some(detail), Ok(matches)),
                    Err(e) => (None, Err(e)),
                };
                if view.complete(ticket, matches) {
                    *team = detail;
                }
            }
            _ => warn!("Fetch outcome does not belong to the current screen"),
        }
    }

    /// Fetches in place and applies the result.
    pub async fn load(&mut self, api: Arc<FootballApi>) {
        match self.fetch_task(api) {
            Some(task) => {
                let outcome = task.await;
                self.apply(outcome);
            }
            None => info!("Fetch skipped, keeping current results"),
        }
    }

    pub fn render(&self, plain: bool, out: &mut dyn Write) -> io::Result<()> {
        match self {
            Screen::Competitions { view } => render_list(view, &CompetitionRow, plain, out),
            Screen::Teams { view } => render_list(view, &TeamRow, plain, out),
            Screen::CompetitionMatches { view, .. } => render_list(
                view,
                &MatchRow {
                    show_indicators: true,
                },
                plain,
                out,
            ),
            Screen::TeamMatches { team, view, .. } => {
                if let Some(team) = team {
                    render_team_header(team, plain, out)?;
                }
                render_list(
                    view,
                    &MatchRow {
                        show_indicators: true,
                    },
                    plain,
                    out,
                )
            }
        }
    }

    pub fn set_page(&mut self, page: usize) {
        match self {
            Screen::Competitions { view } => view.set_page(page),
            Screen::Teams { view } => view.set_page(page),
            Screen::CompetitionMatches { view, .. } | Screen::TeamMatches { view, .. } => {
                view.set_page(page)
            }
        }
    }

    pub fn next_page(&mut self) {
        match self {
            Screen::Competitions { view } => view.next_page(),
            Screen::Teams { view } => view.next_page(),
            Screen::CompetitionMatches { view, .. } | Screen::TeamMatches { view, .. } => {
                view.next_page()
            }
        }
    }

    pub fn previous_page(&mut self) {
        match self {
            Screen::Competitions { view } => view.previous_page(),
            Screen::Teams { view } => view.previous_page(),
            Screen::CompetitionMatches { view, .. } | Screen::TeamMatches { view, .. } => {
                view.previous_page()
            }
        }
    }

    /// Title for the terminal window.
    pub fn title(&self) -> &str {
        match self {
            Screen::Competitions { view } => &view.config().title,
            Screen::Teams { view } => &view.config().title,
            Screen::CompetitionMatches { view, .. } | Screen::TeamMatches { view, .. } => {
                &view.config().title
            }
        }
    }
}

/// Owned description of a fetch, detached from the screen so it can be spawned.
enum FetchTask {
    Competitions(FetchTicket),
    Teams(FetchTicket),
    CompetitionMatches(FetchTicket, String),
    TeamMatches(FetchTicket, String),
}

impl FetchTask {
    async fn run(self, api: Arc<FootballApi>) -> FetchOutcome {
        match self {
            FetchTask::Competitions(ticket) => {
                FetchOutcome::Competitions(ticket, api.list_competitions().await)
            }
            FetchTask::Teams(ticket) => FetchOutcome::Teams(ticket, api.list_teams().await),
            FetchTask::CompetitionMatches(ticket, id) => {
                let result = api.list_competition_matches(&id, ticket.filter()).await;
                FetchOutcome::Matches(ticket, result)
            }
            FetchTask::TeamMatches(ticket, id) => {
                let result = fetch_team_with_matches(&api, &id, &ticket).await;
                FetchOutcome::TeamMatches(ticket, result)
            }
        }
    }
}

/// Matches are requested only once the team itself has loaded.
async fn fetch_team_with_matches(
    api: &FootballApi,
    team_id: &str,
    ticket: &FetchTicket,
) -> Result<(Team, Listing<Match>), AppError> {
    let team = api.get_team(team_id).await?;
    let matches = api.list_team_matches(team_id, ticket.filter()).await?;
    Ok((team, matches))
}
