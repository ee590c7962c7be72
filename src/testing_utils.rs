use crate::data_fetcher::models::{
    Area, Competition, Listing, Match, MatchStatus, MatchTeam, Score, ScorePair, Team,
};
use crate::notify::Notifier;
use std::sync::Mutex;

/// Notifier that keeps every message for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    fn team_ref(id: u64, name: &str) -> MatchTeam {
        MatchTeam {
            id: Some(id),
            name: Some(name.to_string()),
            crest: None,
        }
    }

    /// Creates a competition in the given country
    pub fn create_competition(id: u64, name: &str, area: &str) -> Competition {
        Competition {
            id,
            name: name.to_string(),
            code: None,
            area: Some(Area {
                name: Some(area.to_string()),
                flag: None,
            }),
            emblem: None,
        }
    }

    /// Creates a team in the given country
    pub fn create_team(id: u64, name: &str, area: &str) -> Team {
        Team {
            id,
            name: name.to_string(),
            short_name: None,
            tla: None,
            crest: None,
            area: Some(Area {
                name: Some(area.to_string()),
                flag: None,
            }),
            founded: None,
            venue: None,
        }
    }

    /// Creates a finished match with a full time score
    pub fn create_finished_match(home_team: &str, away_team: &str, home: i32, away: i32) -> Match {
        Match {
            id: 1,
            utc_date: Some("2024-01-20T15:00:00Z".to_string()),
            status: MatchStatus::Finished,
            home_team: Self::team_ref(1, home_team),
            away_team: Self::team_ref(2, away_team),
            score: Some(Score {
                full_time: Some(ScorePair::new(Some(home), Some(away))),
                extra_time: None,
                penalties: None,
            }),
        }
    }

    /// Creates a scheduled match without a score object
    pub fn create_scheduled_match(home_team: &str, away_team: &str) -> Match {
        Match {
            id: 2,
            utc_date: Some("2024-02-03T17:30:00Z".to_string()),
            status: MatchStatus::Scheduled,
            home_team: Self::team_ref(1, home_team),
            away_team: Self::team_ref(2, away_team),
            score: None,
        }
    }

    /// Creates `count` teams named "Team 0", "Team 1", ...
    pub fn create_team_listing(count: usize) -> Listing<Team> {
        Listing {
            items: (0..count)
                .map(|i| Self::create_team(i as u64, &format!("Team {i}"), "England"))
                .collect(),
            count: count as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::default();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(notifier.count(), 2);
    }

    #[test]
    fn test_create_finished_match() {
        let game = TestDataBuilder::create_finished_match("A", "B", 3, 2);
        assert!(game.status.is_finished());
        assert_eq!(game.score.unwrap().full_time_pair(), Some((3, 2)));
    }

    #[test]
    fn test_create_team_listing() {
        let listing = TestDataBuilder::create_team_listing(3);
        assert_eq!(listing.count, 3);
        assert_eq!(listing.items[2].name, "Team 2");
        assert_eq!(listing.items[0].area_name(), Some("England"));
    }
}
