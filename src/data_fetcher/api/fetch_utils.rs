//! Single-attempt HTTP fetching with status mapping and JSON decoding

use reqwest::{Client, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::AUTH_HEADER;
use crate::error::AppError;

/// Builds the full request URL, appending query parameters when present.
pub(super) fn build_request_url(
    url: &str,
    query: &[(&'static str, String)],
) -> Result<Url, AppError> {
    let mut parsed = Url::parse(url)
        .map_err(|e| AppError::upstream(None, format!("Invalid request URL: {e}"), url))?;
    if !query.is_empty() {
        parsed
            .query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(parsed)
}

/// Performs one GET request and decodes the JSON body.
///
/// There is no retry and no cache: a failed attempt surfaces immediately.
/// Errors are mapped to the gateway taxonomy:
/// - 429 → `RateLimited`, 403 → `Forbidden`, 404 → `NotFound`
/// - any other non-2xx, transport failure or non-JSON body → `Upstream`
#[instrument(skip(client, api_key))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    api_key: &str,
    url: &str,
    query: &[(&'static str, String)],
) -> Result<T, AppError> {
    let request_url = build_request_url(url, query)?;
    let url_str = request_url.to_string();
    info!("Fetching data from URL: {url_str}");

    let response = client
        .get(request_url)
        .header(AUTH_HEADER, api_key)
        .header(header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url_str, e);
            let message = if e.is_timeout() {
                format!("request timed out: {e}")
            } else if e.is_connect() {
                format!("connection failed: {e}")
            } else {
                e.to_string()
            };
            AppError::upstream(None, message, &url_str)
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url_str);
        return Err(AppError::from_status(status_code, reason, &url_str));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url_str, e);
        AppError::upstream(Some(status.as_u16()), format!("failed to read body: {e}"), &url_str)
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url_str);
        let preview: String = response_text.chars().take(200).collect();
        debug!("Response text (first 200 chars): {preview}");

        let message = if response_text.trim().is_empty() {
            "response body is empty".to_string()
        } else {
            format!("response is not a valid payload: {e}")
        };
        AppError::upstream(Some(status.as_u16()), message, &url_str)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_url_without_query() {
        let url = build_request_url("https://api.example.com/v4/teams", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v4/teams");
    }

    #[test]
    fn test_build_request_url_with_query() {
        let url = build_request_url(
            "https://api.example.com/v4/teams/57/matches",
            &[
                ("dateFrom", "2024-01-01".to_string()),
                ("dateTo", "2024-01-31".to_string()),
                ("status", "FINISHED".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v4/teams/57/matches?dateFrom=2024-01-01&dateTo=2024-01-31&status=FINISHED"
        );
    }

    #[test]
    fn test_build_request_url_rejects_garbage() {
        let result = build_request_url("not a url", &[]);
        assert!(matches!(result, Err(AppError::Upstream { status: None, .. })));
    }
}
