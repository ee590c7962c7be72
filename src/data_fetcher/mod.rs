pub mod api;
pub mod filter;
pub mod models;

pub use api::FootballApi;
pub use filter::{Filter, FilterGate, validate_filter};
pub use models::{Competition, Listing, Match, MatchStatus, Team};
