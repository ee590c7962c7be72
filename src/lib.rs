//! Football data viewer library
//!
//! Fetches leagues, teams and matches from a football-data.org style API and
//! renders them as paged terminal lists.
//!
//! # Examples
//!
//! ```rust,no_run
//! use football_data_viewer::data_fetcher::{Filter, FootballApi};
//! use football_data_viewer::notify::SilentNotifier;
//! use football_data_viewer::ui::{ListConfig, ListView, MatchRow, render_list};
//! use football_data_viewer::{AppError, Config};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = FootballApi::new(&config, Arc::new(SilentNotifier))?;
//!
//!     let mut view = ListView::new(ListConfig::matches("Premier League"));
//!     view.set_filter(Filter::from_inputs("2024-01-01", "2024-01-31", "FINISHED")?);
//!     view.refresh(|filter| async move { api.list_competition_matches("PL", &filter).await })
//!         .await;
//!
//!     let mut stdout = std::io::stdout();
//!     render_list(&view, &MatchRow { show_indicators: true }, false, &mut stdout)?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod notify;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{Competition, Listing, Match, MatchStatus, Team};
pub use data_fetcher::{Filter, FilterGate, FootballApi};
pub use error::AppError;
pub use notify::{Notifier, SilentNotifier, TerminalNotifier};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
