use serde::Deserialize;
use crate::ytdlp::YtDlp;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 25;
pub const MAX_PER_PAGE: usize = 50;

#[derive(Debug, Clone)]
pub struct AppState {
    pub ytdlp: YtDlp,
    pub playlist_concurrency: usize,
}

#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub search: String,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl LookupQuery {
    /// Applies defaults and bounds, returning `(page, per_page)`.
    pub fn paging(&self) -> Result<(usize, usize), String> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if page < 1 {
            return Err("page must be greater than or equal to 1".to_string());
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(format!("per_page must be between 1 and {MAX_PER_PAGE}"));
        }
        Ok((page, per_page))
    }
}
