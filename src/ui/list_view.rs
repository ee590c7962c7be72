//! Generic list view shared by the league, team and match lists.
//!
//! The view owns the full result set of the last successful fetch and slices it
//! locally. Filter and search changes reset the page to 1; page changes never
//! fetch. Every fetch is tagged with a [`FetchTicket`] and only the latest
//! ticket may update the view.

use crate::constants::pagination::ITEMS_PER_PAGE;
use crate::data_fetcher::filter::{Filter, FilterGate};
use crate::data_fetcher::models::{Competition, Listing, Match, Searchable, Team};
use crate::error::AppError;
use std::future::Future;
use tracing::{debug, info, warn};

use super::pagination::{PageControls, paginate, total_pages};

/// Lifecycle of the view's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Ready,
    /// The last fetch failed; holds the inline error text
    Failed(String),
}

/// Per-list settings: the parts that differ between the four lists.
pub struct ListConfig<T> {
    pub title: String,
    pub page_size: usize,
    /// Case-insensitive search predicate. `None` disables search.
    pub search: Option<fn(&T, &str) -> bool>,
    pub empty_text: &'static str,
    pub error_text: &'static str,
    /// Footer label in front of the upstream count
    pub total_label: &'static str,
}

impl<T> Clone for ListConfig<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            page_size: self.page_size,
            search: self.search,
            empty_text: self.empty_text,
            error_text: self.error_text,
            total_label: self.total_label,
        }
    }
}

fn search_by_name<T: Searchable>(item: &T, needle: &str) -> bool {
    item.matches_search(needle)
}

impl ListConfig<Competition> {
    pub fn competitions() -> Self {
        Self {
            title: "Лиги".to_string(),
            page_size: ITEMS_PER_PAGE,
            search: Some(search_by_name::<Competition>),
            empty_text: "Лиги не найдены",
            error_text: "Ошибка при загрузке лиг",
            total_label: "Всего лиг",
        }
    }
}

impl ListConfig<Team> {
    pub fn teams() -> Self {
        Self {
            title: "Команды".to_string(),
            page_size: ITEMS_PER_PAGE,
            search: Some(search_by_name::<Team>),
            empty_text: "Команды не найдены",
            error_text: "Ошибка при загрузке команд",
            total_label: "Всего команд",
        }
    }
}

impl ListConfig<Match> {
    pub fn matches(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_size: ITEMS_PER_PAGE,
            search: None,
            empty_text: "Матчи не найдены",
            error_text: "Ошибка при загрузке матчей",
            total_label: "Всего матчей",
        }
    }
}

/// Proof that a fetch was started, carrying its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    filter: Filter,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The filter the fetch must be issued with.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }
}

pub struct ListView<T> {
    config: ListConfig<T>,
    state: ViewState,
    items: Vec<T>,
    count: u64,
    filter: Filter,
    search: String,
    page: usize,
    generation: u64,
}

impl<T> ListView<T> {
    pub fn new(config: ListConfig<T>) -> Self {
        Self {
            config,
            state: ViewState::Idle,
            items: Vec::new(),
            count: 0,
            filter: Filter::default(),
            search: String::new(),
            page: 1,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ListConfig<T> {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Total count reported by the upstream for the last successful fetch.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }

    /// Replaces the filter and returns to page 1.
    ///
    /// The returned gate tells the caller whether to fetch. On
    /// [`FilterGate::Skip`] the current items stay as they are.
    pub fn set_filter(&mut self, filter: Filter) -> FilterGate {
        self.filter = filter;
        self.page = 1;
        self.filter.gate()
    }

    /// Replaces the search term and returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Moves to `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Back to defaults, as on navigation to another entity.
    ///
    /// Any fetch still in flight is invalidated.
    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
        self.items.clear();
        self.count = 0;
        self.filter = Filter::default();
        self.search.clear();
        self.page = 1;
        self.generation += 1;
    }

    /// Starts a fetch for the current filter.
    ///
    /// Returns `None` when the filter gate skips: nothing changes and the
    /// previous results stay displayed.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.filter.gate() == FilterGate::Skip {
            info!("Filter has only one date set, skipping fetch");
            return None;
        }
        self.generation += 1;
        self.state = ViewState::Loading;
        debug!("Starting fetch generation {}", self.generation);
        Some(FetchTicket {
            generation: self.generation,
            filter: self.filter.clone(),
        })
    }

    /// Applies the result of the fetch identified by `ticket`.
    ///
    /// Results of superseded fetches are dropped and `false` is returned.
    /// A failure clears the items so no stale data is shown.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Listing<T>, AppError>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Dropping stale result of generation {} (current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(listing) => {
                self.items = listing.items;
                self.count = listing.count;
                self.state = ViewState::Ready;
                let last = self.total_pages().max(1);
                self.page = self.page.min(last);
            }
            Err(e) => {
                warn!("List fetch failed: {e}");
                self.items.clear();
                self.count = 0;
                self.state = ViewState::Failed(self.config.error_text.to_string());
            }
        }
        true
    }

    /// Runs `fetch` with the current filter and applies its result.
    ///
    /// Returns the filter gate outcome; on `Skip` `fetch` is never called.
    pub async fn refresh<F, Fut>(&mut self, fetch: F) -> FilterGate
    where
        F: FnOnce(Filter) -> Fut,
        Fut: Future<Output = Result<Listing<T>, AppError>>,
    {
        let Some(ticket) = self.begin_fetch() else {
            return FilterGate::Skip;
        };
        let result = fetch(ticket.filter().clone()).await;
        self.complete(ticket, result);
        FilterGate::Proceed
    }

    /// Items matching the search term, in upstream order.
    pub fn filtered_items(&self) -> Vec<&T> {
        let needle = self.search.trim().to_lowercase();
        match self.config.search {
            Some(predicate) if !needle.is_empty() => self
                .items
                .iter()
                .filter(|item| predicate(*item, &needle))
                .collect(),
            _ => self.items.iter().collect(),
        }
    }

    /// Items of the current page.
    pub fn page_items(&self) -> Vec<&T> {
        let filtered = self.filtered_items();
        paginate(&filtered, self.page, self.config.page_size)
            .items
            .to_vec()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_items().len(), self.config.page_size)
    }

    /// Page controls, absent when there is at most one page.
    pub fn controls(&self) -> Option<PageControls> {
        PageControls::new(self.page, self.total_pages())
    }
}
