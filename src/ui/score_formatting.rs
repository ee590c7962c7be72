//! Score formatting and win/loss indicators for match rows
//!
//! This module handles:
//! - Choosing between a score line and a placeholder text
//! - Rendering full time, extra time and penalty sub-scores
//! - Per-side win/loss indicators for finished matches

use crate::data_fetcher::models::{Match, MatchStatus, Score};
use crossterm::style::Color;
use std::fmt;

use super::colors::{loss_fg, neutral_fg, win_fg};

/// What the score column of a match row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreDisplay {
    /// No score object, match not started yet
    NotStarted,
    /// No score object, match under way
    InProgress,
    /// No score object, any other status
    NoScore,
    /// Score object without any complete pair on a finished match.
    /// The upstream plan does not include score data for this competition.
    RestrictedByPlan,
    /// Score object without any complete pair
    NoData,
    /// At least one complete sub-score
    Detailed {
        full_time: Option<(i32, i32)>,
        extra_time: Option<(i32, i32)>,
        penalties: Option<(i32, i32)>,
    },
}

impl fmt::Display for ScoreDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreDisplay::NotStarted => f.write_str("Матч не начался"),
            ScoreDisplay::InProgress => f.write_str("В процессе"),
            ScoreDisplay::NoScore => f.write_str("Нет данных о счёте"),
            ScoreDisplay::RestrictedByPlan => f.write_str("Данные не доступны по тарифу"),
            ScoreDisplay::NoData => f.write_str("Нет данных"),
            ScoreDisplay::Detailed {
                full_time,
                extra_time,
                penalties,
            } => {
                let mut parts = Vec::with_capacity(3);
                if let Some((h, a)) = full_time {
                    parts.push(format!("{h}:{a}"));
                }
                if let Some((h, a)) = extra_time {
                    parts.push(format!("({h}:{a})"));
                }
                if let Some((h, a)) = penalties {
                    parts.push(format!("({h}:{a})"));
                }
                f.write_str(&parts.join(" "))
            }
        }
    }
}

/// Decides what to show in the score column.
///
/// # Arguments
/// * `score` - The score object, if the upstream sent one
/// * `status` - The match status
///
/// # Example
/// ```
/// use football_data_viewer::data_fetcher::models::{MatchStatus, Score, ScorePair};
/// use football_data_viewer::ui::score_formatting::score_display;
///
/// let score = Score {
///     full_time: Some(ScorePair::new(Some(2), Some(1))),
///     ..Default::default()
/// };
/// assert_eq!(score_display(Some(&score), &MatchStatus::Finished).to_string(), "2:1");
/// ```
pub fn score_display(score: Option<&Score>, status: &MatchStatus) -> ScoreDisplay {
    let Some(score) = score else {
        return if status.is_not_started() {
            ScoreDisplay::NotStarted
        } else if status.is_in_progress() {
            ScoreDisplay::InProgress
        } else {
            ScoreDisplay::NoScore
        };
    };

    let full_time = score.full_time_pair();
    let extra_time = score.extra_time_pair();
    let penalties = score.penalties_pair();

    if full_time.is_none() && extra_time.is_none() && penalties.is_none() {
        return if status.is_finished() {
            ScoreDisplay::RestrictedByPlan
        } else {
            ScoreDisplay::NoData
        };
    }

    ScoreDisplay::Detailed {
        full_time,
        extra_time,
        penalties,
    }
}

/// Result marker for one side of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Win,
    Loss,
    Neutral,
}

impl Indicator {
    pub fn color(self) -> Color {
        match self {
            Indicator::Win => win_fg(),
            Indicator::Loss => loss_fg(),
            Indicator::Neutral => neutral_fg(),
        }
    }

    /// Marker used when colors are disabled.
    pub fn plain_symbol(self) -> &'static str {
        match self {
            Indicator::Win => "+",
            Indicator::Loss => "-",
            Indicator::Neutral => "=",
        }
    }
}

/// Home and away indicators, or `None` unless the match is finished.
///
/// Missing full time values count as zero.
pub fn indicators(game: &Match) -> Option<(Indicator, Indicator)> {
    if !game.status.is_finished() {
        return None;
    }
    let pair = game
        .score
        .as_ref()
        .and_then(|s| s.full_time)
        .unwrap_or_default();
    let home = pair.home.unwrap_or(0);
    let away = pair.away.unwrap_or(0);

    Some(match home.cmp(&away) {
        std::cmp::Ordering::Greater => (Indicator::Win, Indicator::Loss),
        std::cmp::Ordering::Less => (Indicator::Loss, Indicator::Win),
        std::cmp::Ordering::Equal => (Indicator::Neutral, Indicator::Neutral),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ScorePair;
    use crate::testing_utils::TestDataBuilder;

    fn pair(home: i32, away: i32) -> Option<ScorePair> {
        Some(ScorePair::new(Some(home), Some(away)))
    }

    #[test]
    fn test_finished_full_time_win() {
        let game = TestDataBuilder::create_finished_match("Arsenal FC", "Chelsea FC", 2, 1);

        let display = score_display(game.score.as_ref(), &game.status);
        assert_eq!(display.to_string(), "2:1");
        assert_eq!(indicators(&game), Some((Indicator::Win, Indicator::Loss)));
    }

    #[test]
    fn test_finished_empty_score_is_restricted() {
        let mut game = TestDataBuilder::create_finished_match("A", "B", 0, 0);
        game.score = Some(Score::default());

        let display = score_display(game.score.as_ref(), &game.status);
        assert_eq!(display, ScoreDisplay::RestrictedByPlan);
        assert_eq!(display.to_string(), "Данные не доступны по тарифу");
        // Missing full time counts as 0:0
        assert_eq!(
            indicators(&game),
            Some((Indicator::Neutral, Indicator::Neutral))
        );
    }

    #[test]
    fn test_placeholder_without_score_object() {
        assert_eq!(
            score_display(None, &MatchStatus::Timed).to_string(),
            "Матч не начался"
        );
        assert_eq!(
            score_display(None, &MatchStatus::Paused).to_string(),
            "В процессе"
        );
        assert_eq!(
            score_display(None, &MatchStatus::Postponed).to_string(),
            "Нет данных о счёте"
        );
        assert_eq!(
            score_display(None, &MatchStatus::Finished).to_string(),
            "Нет данных о счёте"
        );
    }

    #[test]
    fn test_empty_score_on_unfinished_match() {
        assert_eq!(
            score_display(Some(&Score::default()), &MatchStatus::Scheduled),
            ScoreDisplay::NoData
        );
    }

    #[test]
    fn test_extra_time_and_penalties() {
        let score = Score {
            full_time: pair(1, 1),
            extra_time: pair(0, 0),
            penalties: pair(4, 3),
        };
        assert_eq!(
            score_display(Some(&score), &MatchStatus::Finished).to_string(),
            "1:1 (0:0) (4:3)"
        );
    }

    #[test]
    fn test_half_filled_pair_is_hidden() {
        let score = Score {
            full_time: Some(ScorePair::new(Some(1), None)),
            extra_time: None,
            penalties: pair(5, 4),
        };
        assert_eq!(
            score_display(Some(&score), &MatchStatus::Finished).to_string(),
            "(5:4)"
        );
    }

    #[test]
    fn test_indicators_only_for_finished() {
        let mut game = TestDataBuilder::create_finished_match("A", "B", 0, 3);
        assert_eq!(indicators(&game), Some((Indicator::Loss, Indicator::Win)));

        game.status = MatchStatus::InPlay;
        assert_eq!(indicators(&game), None);
    }

    #[test]
    fn test_indicator_colors() {
        assert_eq!(Indicator::Win.color(), win_fg());
        assert_eq!(Indicator::Loss.color(), loss_fg());
        assert_eq!(Indicator::Neutral.color(), neutral_fg());
    }
}
