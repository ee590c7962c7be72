use crate::config::Config;
use crate::data_fetcher::filter::Filter;
use crate::data_fetcher::models::{
    Competition, CompetitionsResponse, Listing, Match, MatchesResponse, Team, TeamsResponse,
};
use crate::error::AppError;
use crate::notify::Notifier;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_competition_matches_url, build_competitions_url, build_team_matches_url,
    build_team_url, build_teams_url, with_default_scheme,
};

/// Remote data gateway for the football data API.
///
/// Every request carries the configured credential. Every failure is logged,
/// announced once through the [`Notifier`] and then returned to the caller, so
/// the calling view can additionally show its own inline error state.
pub struct FootballApi {
    client: Client,
    base_url: String,
    api_key: String,
    notifier: Arc<dyn Notifier>,
}

impl FootballApi {
    /// Creates a gateway with a fresh HTTP client configured from `config`.
    pub fn new(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)
            .map_err(AppError::HttpClient)?;
        Ok(Self::with_client(client, config, notifier))
    }

    /// Creates a gateway around an existing [`reqwest::Client`].
    ///
    /// The base URL is used as configured; only a missing scheme is filled in.
    pub fn with_client(client: Client, config: &Config, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            base_url: with_default_scheme(config.base_url()),
            api_key: config.api_key.clone(),
            notifier,
        }
    }

    /// Lists all competitions available to the credential.
    #[instrument(skip(self))]
    pub async fn list_competitions(&self) -> Result<Listing<Competition>, AppError> {
        let url = build_competitions_url(&self.base_url);
        let response: CompetitionsResponse = self.get(&url, &[]).await?;
        info!("Fetched {} competitions", response.competitions.len());
        Ok(response.into())
    }

    /// Lists the matches of one competition.
    #[instrument(skip(self))]
    pub async fn list_competition_matches(
        &self,
        competition_id: &str,
        filter: &Filter,
    ) -> Result<Listing<Match>, AppError> {
        let url = build_competition_matches_url(&self.base_url, competition_id);
        let response: MatchesResponse = self.get(&url, &filter.query_params()).await?;
        info!(
            "Fetched {} matches for competition {}",
            response.matches.len(),
            competition_id
        );
        Ok(response.into())
    }

    /// Lists all teams.
    #[instrument(skip(self))]
    pub async fn list_teams(&self) -> Result<Listing<Team>, AppError> {
        let url = build_teams_url(&self.base_url);
        let response: TeamsResponse = self.get(&url, &[]).await?;
        info!("Fetched {} teams", response.teams.len());
        Ok(response.into())
    }

    /// Fetches one team.
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: &str) -> Result<Team, AppError> {
        let url = build_team_url(&self.base_url, team_id);
        self.get(&url, &[]).await
    }

    /// Lists the matches of one team.
    #[instrument(skip(self))]
    pub async fn list_team_matches(
        &self,
        team_id: &str,
        filter: &Filter,
    ) -> Result<Listing<Match>, AppError> {
        let url = build_team_matches_url(&self.base_url, team_id);
        let response: MatchesResponse = self.get(&url, &filter.query_params()).await?;
        info!(
            "Fetched {} matches for team {}",
            response.matches.len(),
            team_id
        );
        Ok(response.into())
    }

    /// Fetch, then notify on failure. The error is returned unchanged.
    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, AppError> {
        match fetch(&self.client, &self.api_key, url, query).await {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                error!("API Error: {e}");
                self.notifier.notify(e.user_message());
                Err(e)
            }
        }
    }
}
