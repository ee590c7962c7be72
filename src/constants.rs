//! Application-wide constants and configuration values

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Header carrying the static API credential
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Directory name used under the platform config dir
pub const APP_DIR_NAME: &str = "football_data_viewer";

/// Default log file name
pub const LOG_FILE_NAME: &str = "football_data_viewer.log";

/// Environment variable names that override config file values
pub mod env {
    pub const API_BASE_URL: &str = "FOOTBALL_API_BASE_URL";
    pub const API_KEY: &str = "FOOTBALL_API_KEY";
    pub const LOG_FILE: &str = "FOOTBALL_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_HTTP_TIMEOUT";
}

/// Pagination constants
pub mod pagination {
    /// Items shown on one page of every list view
    pub const ITEMS_PER_PAGE: usize = 10;

    /// Maximum number of page links in the page window
    pub const PAGE_WINDOW_SIZE: usize = 10;

    /// How many pages before the current one the window tries to show
    pub const PAGE_WINDOW_LEAD: usize = 5;
}

/// Interactive pager polling interval in milliseconds
pub const INPUT_POLL_MS: u64 = 200;
