use crate::errors::YtDlpError;
use crate::models::PlaylistRecord;
use crate::ytdlp::{DumpOptions, YtDlp};
use super::fields::{best_thumbnail, playlist_url, uploads_playlist_id};
use super::playlists::{flat_items, playlist_record, Container};

const CHANNEL_TYPE: &str = "YouTube Channel";

/// Lists a channel's long-form uploads through its uploads playlist, which
/// leaves out shorts.
pub async fn get_channel_uploads(ytdlp: &YtDlp, url: &str) -> Result<PlaylistRecord, YtDlpError> {
    tracing::info!(%url, "fetching channel metadata");
    let meta = ytdlp.dump_single_json(url, DumpOptions::metadata_only()).await?;

    let channel_id = meta
        .channel_id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(|| meta.id.clone().filter(|id| !id.is_empty()))
        .ok_or(YtDlpError::MissingField("channel_id"))?;

    let uploads_url = playlist_url(&uploads_playlist_id(&channel_id));
    tracing::debug!(%channel_id, %uploads_url, "fetching uploads playlist");
    let listing = ytdlp.dump_single_json(&uploads_url, DumpOptions::flat()).await?;

    let container = Container {
        image: best_thumbnail(meta.thumbnails.as_ref()),
        id: Some(channel_id),
        title: meta.channel,
        publisher: meta.uploader,
        description: meta.description,
    };

    Ok(playlist_record(
        CHANNEL_TYPE,
        url,
        "/channel",
        container,
        flat_items(&listing),
        None,
    ))
}
