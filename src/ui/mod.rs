pub mod colors;
pub mod date_format;
pub mod list_view;
pub mod pagination;
pub mod render;
pub mod score_formatting;
pub mod screen;
pub mod status;

pub use list_view::{FetchTicket, ListConfig, ListView, ViewState};
pub use pagination::{Page, PageControls, page_window, paginate, total_pages};
pub use render::{CompetitionRow, MatchRow, RowRenderer, TeamRow, render_list, render_team_header};
pub use screen::{FetchOutcome, Screen};
pub use score_formatting::{Indicator, ScoreDisplay, indicators, score_display};
pub use status::status_label;
