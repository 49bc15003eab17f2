use crate::models::ItemType;
use crate::ytdlp::Info;

const VIDEO_PATTERNS: &[&str] = &[
    "youtube.com/watch?v=",
    "youtu.be/",
    "youtube.com/shorts/",
    "youtube.com/live/",
    "youtube.com/embed/",
];

const PLAYLIST_PATTERNS: &[&str] = &["youtube.com/playlist?list=", "list="];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Video,
    Playlist,
}

/// Substring match only; anything unrecognised is treated as a search term.
pub fn classify_url(input: &str) -> Option<UrlKind> {
    if VIDEO_PATTERNS.iter().any(|p| input.contains(p)) {
        Some(UrlKind::Video)
    } else if PLAYLIST_PATTERNS.iter().any(|p| input.contains(p)) {
        Some(UrlKind::Playlist)
    } else {
        None
    }
}

pub fn classify_item(info: &Info) -> ItemType {
    if info.is_live() {
        ItemType::LiveVideo
    } else if info.duration.is_some_and(f64::is_finite) {
        ItemType::Video
    } else if info.entries.is_some() {
        ItemType::Playlist
    } else {
        ItemType::Unknown
    }
}
