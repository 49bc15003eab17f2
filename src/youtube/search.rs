use std::ops::Range;
use crate::errors::YtDlpError;
use crate::models::{LookupResponse, SearchResultItem};
use crate::ytdlp::{DumpOptions, Info, YtDlp};
use super::classify::{classify_item, classify_url, UrlKind};
use super::fields::{best_thumbnail, iso_upload_date, watch_url};

/// Results fetched beyond the requested page.
pub const OVERFETCH: usize = 10;

/// Resolves free-form input: a video url, a playlist url, or a search term.
pub async fn lookup(
    ytdlp: &YtDlp,
    input: &str,
    page: usize,
    per_page: usize,
) -> Result<LookupResponse, YtDlpError> {
    match classify_url(input) {
        Some(UrlKind::Video) => {
            tracing::info!(%input, "lookup as video");
            let info = ytdlp.dump_single_json(input, DumpOptions::single_video()).await?;
            Ok(LookupResponse::Video {
                result: search_item(&info),
            })
        }
        Some(UrlKind::Playlist) => {
            tracing::info!(%input, "lookup as playlist");
            let listing = ytdlp.dump_single_json(input, DumpOptions::flat()).await?;
            let results: Vec<_> = listing
                .entries()
                .filter(|entry| is_listed(entry))
                .map(search_item)
                .collect();
            Ok(LookupResponse::Playlist {
                title: listing.title,
                total_found: results.len(),
                results,
            })
        }
        None => {
            let count = page.saturating_mul(per_page).saturating_add(OVERFETCH);
            tracing::info!(query = %input, page, per_page, count, "searching");
            let found = ytdlp.search(input, count).await?;
            let total_found = found.len();
            let results = found[page_bounds(total_found, page, per_page)]
                .iter()
                .map(search_item)
                .collect();
            Ok(LookupResponse::Search {
                query: input.to_string(),
                page,
                per_page,
                total_found,
                results,
            })
        }
    }
}

/// Flat entries are only admitted with the `url` type tag and an id.
fn is_listed(entry: &Info) -> bool {
    entry.kind.as_deref() == Some("url") && entry.id.is_some()
}

/// Index range of `page` (1-based) within `len` fetched results.
pub fn page_bounds(len: usize, page: usize, per_page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(len);
    let end = page.saturating_mul(per_page).min(len);
    start..end
}

pub(crate) fn search_item(info: &Info) -> SearchResultItem {
    let url = info
        .webpage_url
        .clone()
        .or_else(|| info.url.clone().filter(|_| info.kind.as_deref() == Some("url")))
        .or_else(|| info.id.as_deref().map(watch_url));

    SearchResultItem {
        title: info.title.clone(),
        id: info.id.clone(),
        url,
        channel: info.channel.clone().or_else(|| info.uploader.clone()),
        channel_url: info.channel_url.clone().or_else(|| info.uploader_url.clone()),
        upload_date: info.upload_date.as_deref().and_then(iso_upload_date),
        thumbnail: best_thumbnail(info.thumbnails.as_ref()).or_else(|| info.thumbnail.clone()),
        duration: info.duration,
        release_timestamp: info.release_timestamp,
        is_live: info.is_live(),
        item_type: classify_item(info),
    }
}
