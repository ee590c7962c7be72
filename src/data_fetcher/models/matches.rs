use super::common::{Listing, lenient, lenient_count, lenient_option, lenient_vec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Match status as reported upstream. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchStatus {
    Scheduled,
    Timed,
    Live,
    InPlay,
    Paused,
    Finished,
    Postponed,
    Suspended,
    Canceled,
    Other(String),
}

impl MatchStatus {
    /// Statuses offered by the match filter.
    pub const FILTERABLE: [MatchStatus; 5] = [
        MatchStatus::Scheduled,
        MatchStatus::Live,
        MatchStatus::Finished,
        MatchStatus::Postponed,
        MatchStatus::Canceled,
    ];

    pub fn is_filterable(&self) -> bool {
        Self::FILTERABLE.contains(self)
    }

    /// Wire representation used in payloads and the `status` query parameter.
    pub fn as_api_str(&self) -> &str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Timed => "TIMED",
            MatchStatus::Live => "LIVE",
            MatchStatus::InPlay => "IN_PLAY",
            MatchStatus::Paused => "PAUSED",
            MatchStatus::Finished => "FINISHED",
            MatchStatus::Postponed => "POSTPONED",
            MatchStatus::Suspended => "SUSPENDED",
            MatchStatus::Canceled => "CANCELED",
            MatchStatus::Other(raw) => raw,
        }
    }

    pub fn is_not_started(&self) -> bool {
        matches!(self, MatchStatus::Scheduled | MatchStatus::Timed)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            MatchStatus::Live | MatchStatus::InPlay | MatchStatus::Paused
        )
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, MatchStatus::Finished)
    }
}

impl Default for MatchStatus {
    fn default() -> Self {
        MatchStatus::Other(String::new())
    }
}

impl From<String> for MatchStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "SCHEDULED" => MatchStatus::Scheduled,
            "TIMED" => MatchStatus::Timed,
            "LIVE" => MatchStatus::Live,
            "IN_PLAY" => MatchStatus::InPlay,
            "PAUSED" => MatchStatus::Paused,
            "FINISHED" => MatchStatus::Finished,
            "POSTPONED" => MatchStatus::Postponed,
            "SUSPENDED" => MatchStatus::Suspended,
            "CANCELED" => MatchStatus::Canceled,
            _ => MatchStatus::Other(raw),
        }
    }
}

impl From<MatchStatus> for String {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Other(raw) => raw,
            known => known.as_api_str().to_string(),
        }
    }
}

/// Parses user input case-insensitively; never fails.
impl FromStr for MatchStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MatchStatus::from(s.trim().to_uppercase()))
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// One side of a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    #[serde(default, deserialize_with = "lenient_option")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub name: Option<String>,
    #[serde(default, alias = "crestUrl", deserialize_with = "lenient_option")]
    pub crest: Option<String>,
}

/// Home/away goals of one phase. Either side may be null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    #[serde(default, alias = "homeTeam", deserialize_with = "lenient_option")]
    pub home: Option<i32>,
    #[serde(default, alias = "awayTeam", deserialize_with = "lenient_option")]
    pub away: Option<i32>,
}

impl ScorePair {
    pub fn new(home: Option<i32>, away: Option<i32>) -> Self {
        Self { home, away }
    }

    /// Both values, only when neither side is null.
    pub fn both(&self) -> Option<(i32, i32)> {
        Some((self.home?, self.away?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    #[serde(default, deserialize_with = "lenient_option")]
    pub full_time: Option<ScorePair>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub extra_time: Option<ScorePair>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub penalties: Option<ScorePair>,
}

impl Score {
    pub fn full_time_pair(&self) -> Option<(i32, i32)> {
        self.full_time.as_ref().and_then(ScorePair::both)
    }

    pub fn extra_time_pair(&self) -> Option<(i32, i32)> {
        self.extra_time.as_ref().and_then(ScorePair::both)
    }

    pub fn penalties_pair(&self) -> Option<(i32, i32)> {
        self.penalties.as_ref().and_then(ScorePair::both)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, deserialize_with = "lenient")]
    pub id: u64,
    /// Kickoff as an RFC 3339 UTC timestamp
    #[serde(default, deserialize_with = "lenient_option")]
    pub utc_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: MatchStatus,
    #[serde(default, deserialize_with = "lenient")]
    pub home_team: MatchTeam,
    #[serde(default, deserialize_with = "lenient")]
    pub away_team: MatchTeam,
    #[serde(default, deserialize_with = "lenient_option")]
    pub score: Option<Score>,
}

impl Match {
    /// Parsed kickoff time, `None` if missing or unparseable.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        self.utc_date
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Body of `GET /competitions/{id}/matches` and `GET /teams/{id}/matches`
#[derive(Debug, Default, Deserialize)]
pub struct MatchesResponse {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub matches: Vec<Match>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
}

impl From<MatchesResponse> for Listing<Match> {
    fn from(response: MatchesResponse) -> Self {
        Listing {
            items: response.matches,
            count: response.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_status_roundtrip_and_passthrough() {
        assert_eq!(MatchStatus::from("IN_PLAY".to_string()), MatchStatus::InPlay);
        assert_eq!(
            MatchStatus::from("WEIRD_NEW_STATUS".to_string()),
            MatchStatus::Other("WEIRD_NEW_STATUS".to_string())
        );
        assert_eq!(String::from(MatchStatus::Canceled), "CANCELED");
        assert_eq!(
            String::from(MatchStatus::Other("AWARDED".to_string())),
            "AWARDED"
        );
    }

    #[test]
    fn test_filterable_statuses() {
        assert!(MatchStatus::Finished.is_filterable());
        assert!(MatchStatus::Canceled.is_filterable());
        assert!(!MatchStatus::InPlay.is_filterable());
        assert!(!MatchStatus::Other("AWARDED".to_string()).is_filterable());
    }

    #[test]
    fn test_status_from_str_is_case_insensitive() {
        assert_eq!("finished".parse::<MatchStatus>().unwrap(), MatchStatus::Finished);
        assert_eq!(" live ".parse::<MatchStatus>().unwrap(), MatchStatus::Live);
    }

    #[test]
    fn test_decode_match_v4_shape() {
        let json = r#"{
            "id": 436000,
            "utcDate": "2024-01-20T15:00:00Z",
            "status": "FINISHED",
            "homeTeam": {"id": 57, "name": "Arsenal FC", "crest": "https://crests.example/57.png"},
            "awayTeam": {"id": 61, "name": "Chelsea FC", "crest": null},
            "score": {"fullTime": {"home": 2, "away": 1}, "extraTime": {"home": null, "away": null}}
        }"#;

        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.status, MatchStatus::Finished);
        assert_eq!(m.home_team.name.as_deref(), Some("Arsenal FC"));
        assert_eq!(m.away_team.crest, None);

        let score = m.score.as_ref().unwrap();
        assert_eq!(score.full_time_pair(), Some((2, 1)));
        assert_eq!(score.extra_time_pair(), None);
        assert_eq!(score.penalties_pair(), None);

        let kickoff = m.kickoff().unwrap();
        assert_eq!(kickoff.year(), 2024);
        assert_eq!(kickoff.hour(), 15);
    }

    #[test]
    fn test_decode_legacy_score_names() {
        let json = r#"{"fullTime": {"homeTeam": 0, "awayTeam": 3}, "penalties": {"homeTeam": 4, "awayTeam": null}}"#;
        let score: Score = serde_json::from_str(json).unwrap();
        assert_eq!(score.full_time_pair(), Some((0, 3)));
        assert_eq!(score.penalties_pair(), None);
    }

    #[test]
    fn test_unknown_and_missing_status() {
        let m: Match = serde_json::from_str(r#"{"id": 1, "status": "AWARDED"}"#).unwrap();
        assert_eq!(m.status, MatchStatus::Other("AWARDED".to_string()));
        assert_eq!(m.score, None);

        let m: Match = serde_json::from_str(r#"{"id": 2, "status": 7}"#).unwrap();
        assert_eq!(m.status, MatchStatus::default());
    }

    #[test]
    fn test_invalid_kickoff_is_none() {
        let m = Match {
            utc_date: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(m.kickoff(), None);
    }
}
