//! URL building utilities for API endpoints

/// Builds the competitions list URL.
///
/// # Example
/// ```
/// use football_data_viewer::data_fetcher::api::build_competitions_url;
///
/// let url = build_competitions_url("https://api.example.com/v4");
/// assert_eq!(url, "https://api.example.com/v4/competitions");
/// ```
pub fn build_competitions_url(base_url: &str) -> String {
    format!("{base_url}/competitions")
}

/// Builds the URL of the matches of one competition.
///
/// # Example
/// ```
/// use football_data_viewer::data_fetcher::api::build_competition_matches_url;
///
/// let url = build_competition_matches_url("https://api.example.com/v4", "PL");
/// assert_eq!(url, "https://api.example.com/v4/competitions/PL/matches");
/// ```
pub fn build_competition_matches_url(base_url: &str, competition_id: &str) -> String {
    format!("{base_url}/competitions/{competition_id}/matches")
}

/// Builds the teams list URL.
pub fn build_teams_url(base_url: &str) -> String {
    format!("{base_url}/teams")
}

/// Builds the URL of a single team.
///
/// # Example
/// ```
/// use football_data_viewer::data_fetcher::api::build_team_url;
///
/// let url = build_team_url("https://api.example.com/v4", "57");
/// assert_eq!(url, "https://api.example.com/v4/teams/57");
/// ```
pub fn build_team_url(base_url: &str, team_id: &str) -> String {
    format!("{base_url}/teams/{team_id}")
}

/// Builds the URL of the matches of one team.
pub fn build_team_matches_url(base_url: &str, team_id: &str) -> String {
    format!("{base_url}/teams/{team_id}/matches")
}

/// Prefixes `https://` when the base URL has no scheme. Explicit schemes are kept.
pub fn with_default_scheme(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.is_empty() || trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_urls() {
        assert_eq!(build_teams_url("http://localhost:1"), "http://localhost:1/teams");
        assert_eq!(
            build_team_matches_url("http://localhost:1", "86"),
            "http://localhost:1/teams/86/matches"
        );
    }

    #[test]
    fn test_with_default_scheme() {
        assert_eq!(
            with_default_scheme("http://devproxy.lan:3000/api"),
            "http://devproxy.lan:3000/api"
        );
        assert_eq!(
            with_default_scheme("api.football-data.org/v4"),
            "https://api.football-data.org/v4"
        );
        assert_eq!(with_default_scheme(""), "");
    }
}
