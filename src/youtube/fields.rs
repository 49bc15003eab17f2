use chrono::NaiveDate;
use serde_json::Value;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=";
const UPLOADS_PREFIX: &str = "UU";

/// Picks the thumbnail with the largest width x height. Entries without both
/// dimensions only count when none has them, in which case the first entry
/// with a url wins.
pub fn best_thumbnail(thumbnails: Option<&Value>) -> Option<String> {
    let candidates = thumbnails?.as_array()?;

    let mut best: Option<(f64, &str)> = None;
    for thumb in candidates {
        let Some(url) = thumb.get("url").and_then(Value::as_str) else {
            continue;
        };
        let width = thumb.get("width").and_then(Value::as_f64);
        let height = thumb.get("height").and_then(Value::as_f64);
        if let (Some(w), Some(h)) = (width, height) {
            let area = w * h;
            if best.map_or(true, |(max, _)| area > max) {
                best = Some((area, url));
            }
        }
    }

    best.map(|(_, url)| url)
        .or_else(|| {
            candidates
                .iter()
                .find_map(|thumb| thumb.get("url").and_then(Value::as_str))
        })
        .map(str::to_string)
}

/// `YYYYMMDD` to `YYYY-MM-DD`; anything else is `None`.
pub fn iso_upload_date(raw: &str) -> Option<String> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

pub fn duration_ms(seconds: Option<f64>) -> Option<i64> {
    seconds
        .filter(|s| s.is_finite())
        .map(|s| (s * 1000.0) as i64)
}

pub fn watch_url(id: &str) -> String {
    format!("{WATCH_URL}{id}")
}

pub fn playlist_url(id: &str) -> String {
    format!("{PLAYLIST_URL}{id}")
}

/// A channel's long-form uploads live in the playlist whose id swaps the
/// channel id's `UC` prefix for `UU`.
pub fn uploads_playlist_id(channel_id: &str) -> String {
    let rest = channel_id.char_indices().nth(2).map_or("", |(idx, _)| &channel_id[idx..]);
    format!("{UPLOADS_PREFIX}{rest}")
}
