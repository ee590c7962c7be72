pub mod common;
pub mod competition;
pub mod matches;
pub mod team;

pub use common::{Area, Listing, Searchable};
pub use competition::{Competition, CompetitionsResponse};
pub use matches::{Match, MatchStatus, MatchTeam, MatchesResponse, Score, ScorePair};
pub use team::{Team, TeamsResponse};
