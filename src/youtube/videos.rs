use crate::errors::YtDlpError;
use crate::models::VideoRecord;
use crate::ytdlp::{DumpOptions, Info, YtDlp};
use super::fields::{best_thumbnail, duration_ms, iso_upload_date};

const VIDEO_TYPE: &str = "YouTube Video";

pub async fn get_video(ytdlp: &YtDlp, url: &str) -> Result<VideoRecord, YtDlpError> {
    tracing::info!(%url, "fetching video metadata");
    let info = ytdlp.dump_single_json(url, DumpOptions::single_video()).await?;
    Ok(video_record(url, info))
}

pub(crate) fn video_record(url: &str, info: Info) -> VideoRecord {
    let is_live = info.is_live();
    VideoRecord {
        r#type: VIDEO_TYPE.to_string(),
        url: url.to_string(),
        thumbnail: best_thumbnail(info.thumbnails.as_ref()),
        // a zero duration means the extractor had none
        duration_ms: duration_ms(info.duration.filter(|d| *d != 0.0)),
        upload_date: info.upload_date.as_deref().and_then(iso_upload_date),
        id: info.id,
        title: info.title,
        description: info.description,
        uploader: info.uploader,
        uploader_url: info.uploader_url,
        view_count: info.view_count,
        is_live,
    }
}
