use std::sync::Arc;
use parking_lot::Mutex;
use tokio::task::JoinSet;
use crate::errors::YtDlpError;
use crate::models::{PlaylistItem, PlaylistRecord};
use crate::ytdlp::{DumpOptions, Info, YtDlp};
use super::fields::{best_thumbnail, duration_ms, watch_url};

const PLAYLIST_TYPE: &str = "YouTube Playlist";

/// Container-level attributes shared by playlist and channel listings.
#[derive(Debug, Default)]
pub(crate) struct Container {
    pub id: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl Container {
    pub fn from_playlist(meta: Info) -> Self {
        Container {
            image: best_thumbnail(meta.thumbnails.as_ref()),
            id: meta.id,
            title: meta.title,
            publisher: meta.uploader,
            description: meta.description,
        }
    }
}

/// Builds the response envelope. `pagination` fills next/offset/previous.
pub(crate) fn playlist_record(
    kind: &str,
    url: &str,
    endpoint: &str,
    container: Container,
    items: Vec<PlaylistItem>,
    pagination: Option<i64>,
) -> PlaylistRecord {
    let count = items.len();
    PlaylistRecord {
        r#type: kind.to_string(),
        url: url.to_string(),
        id: container.id,
        title: container.title,
        publisher: container.publisher,
        image: container.image,
        description: container.description,
        total_episodes: count,
        api_href: format!("{endpoint}?url={url}"),
        limit: count,
        next: pagination,
        offset: pagination,
        previous: pagination,
        total: count,
        items,
    }
}

/// Flat entries only carry an id and a title.
pub(crate) fn flat_items(listing: &Info) -> Vec<PlaylistItem> {
    listing
        .entries()
        .map(|entry| PlaylistItem {
            url: entry.id.as_deref().map(watch_url),
            title: entry.title.clone(),
            description: None,
            duration_ms: None,
        })
        .collect()
}

pub async fn get_flat_playlist(ytdlp: &YtDlp, url: &str) -> Result<PlaylistRecord, YtDlpError> {
    tracing::info!(%url, "fetching flat playlist");
    let meta = ytdlp.dump_single_json(url, DumpOptions::metadata_only()).await?;
    let listing = ytdlp.dump_single_json(url, DumpOptions::flat()).await?;
    let items = flat_items(&listing);

    Ok(playlist_record(
        PLAYLIST_TYPE,
        url,
        "/flatlist",
        Container::from_playlist(meta),
        items,
        None,
    ))
}

/// Like [`get_flat_playlist`] but every entry gets its own full metadata
/// fetch. Entries that fail are dropped from the listing.
pub async fn get_full_playlist(
    ytdlp: &YtDlp,
    url: &str,
    concurrency: usize,
) -> Result<PlaylistRecord, YtDlpError> {
    tracing::info!(%url, concurrency, "fetching full playlist");
    let meta = ytdlp.dump_single_json(url, DumpOptions::metadata_only()).await?;
    let listing = ytdlp.dump_single_json(url, DumpOptions::flat()).await?;

    let ids: Vec<Option<String>> = listing.entries().map(|e| e.id.clone()).collect();
    tracing::debug!(title = ?meta.title, entries = ids.len(), "playlist listed");
    let items = fetch_items(ytdlp, ids, concurrency).await;

    Ok(playlist_record(
        PLAYLIST_TYPE,
        url,
        "/playlist",
        Container::from_playlist(meta),
        items,
        Some(0),
    ))
}

/// Fetches entries with `width` workers pulling from a shared queue. Results
/// land in per-index slots so playlist order survives any pool width. The
/// workers live in a `JoinSet`, so dropping this future aborts them.
async fn fetch_items(ytdlp: &YtDlp, ids: Vec<Option<String>>, width: usize) -> Vec<PlaylistItem> {
    let total = ids.len();
    if total == 0 {
        return Vec::new();
    }

    let slots: Arc<Mutex<Vec<Option<PlaylistItem>>>> = Arc::new(Mutex::new(vec![None; total]));
    let (tx, rx) = async_channel::unbounded();
    for job in ids.into_iter().enumerate() {
        if tx.send(job).await.is_err() {
            break;
        }
    }
    tx.close();

    let mut workers = JoinSet::new();
    for _ in 0..width.clamp(1, total) {
        let rx = rx.clone();
        let ytdlp = ytdlp.clone();
        let slots = Arc::clone(&slots);
        workers.spawn(async move {
            while let Ok((index, id)) = rx.recv().await {
                if let Some(item) = fetch_item(&ytdlp, index, total, id).await {
                    slots.lock()[index] = Some(item);
                }
            }
        });
    }

    while let Some(joined) = workers.join_next().await {
        if let Err(e) = joined {
            tracing::error!(error = %e, "playlist worker aborted");
        }
    }

    let items: Vec<PlaylistItem> = slots.lock().drain(..).flatten().collect();
    items
}

async fn fetch_item(ytdlp: &YtDlp, index: usize, total: usize, id: Option<String>) -> Option<PlaylistItem> {
    let Some(id) = id else {
        tracing::warn!(index, "playlist entry has no id, skipping");
        return None;
    };

    tracing::debug!(position = index + 1, total, %id, "fetching video details");
    match ytdlp.dump_single_json(&watch_url(&id), DumpOptions::default()).await {
        Ok(info) => Some(PlaylistItem {
            url: Some(watch_url(info.id.as_deref().unwrap_or(&id))),
            title: info.title,
            description: info.description,
            duration_ms: duration_ms(info.duration),
        }),
        Err(e) => {
            tracing::warn!(%id, error = %e, "failed to fetch video details, skipping");
            None
        }
    }
}
