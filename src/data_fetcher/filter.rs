//! Match filter and the gate that decides whether a filter may trigger a fetch.

use crate::data_fetcher::models::MatchStatus;
use crate::error::AppError;
use chrono::NaiveDate;
use tracing::warn;

/// Date format used by the API and accepted from the user
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date range and status filter for match lists.
///
/// `date_from` and `date_to` must be set together; see [`validate_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: Option<MatchStatus>,
}

/// Outcome of the filter gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGate {
    Proceed,
    /// Exactly one range endpoint is set. Not an error: nothing is fetched and
    /// the previous results stay on screen.
    Skip,
}

/// Returns whether a fetch with this filter should proceed.
/// Status never blocks.
pub fn validate_filter(filter: &Filter) -> FilterGate {
    if filter.date_from.is_some() == filter.date_to.is_some() {
        FilterGate::Proceed
    } else {
        FilterGate::Skip
    }
}

impl Filter {
    /// Builds a filter from raw user input. Empty strings mean "not set".
    ///
    /// # Errors
    /// `AppError::DateTimeParse` when a non-empty date is not `YYYY-MM-DD`.
    pub fn from_inputs(date_from: &str, date_to: &str, status: &str) -> Result<Self, AppError> {
        let status = status.trim();
        let status = (!status.is_empty()).then(|| MatchStatus::from(status.to_uppercase()));
        if let Some(status) = &status
            && !status.is_filterable()
        {
            warn!("Status {} is not a filter option, forwarding as is", status.as_api_str());
        }
        Ok(Filter {
            date_from: parse_optional_date(date_from)?,
            date_to: parse_optional_date(date_to)?,
            status,
        })
    }

    pub fn gate(&self) -> FilterGate {
        validate_filter(self)
    }

    /// Query parameters for the matches endpoints. The date range is included
    /// only when both ends are set.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            params.push(("dateFrom", from.format(DATE_FORMAT).to_string()));
            params.push(("dateTo", to.format(DATE_FORMAT).to_string()));
        }
        if let Some(status) = &self.status
            && !status.as_api_str().is_empty()
        {
            params.push(("status", status.as_api_str().to_string()));
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none() && self.status.is_none()
    }
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|e| AppError::datetime_parse_error(format!("'{raw}' is not a YYYY-MM-DD date: {e}")))
}
