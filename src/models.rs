use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    LiveVideo,
    Video,
    Playlist,
    Unknown,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoRecord {
    pub r#type: String,
    pub url: String,
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_ms: Option<i64>,
    pub uploader: Option<String>,
    pub uploader_url: Option<String>,
    pub thumbnail: Option<String>,
    pub view_count: Option<i64>,
    pub upload_date: Option<String>,
    pub is_live: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistItem {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_ms: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistRecord {
    pub r#type: String,
    pub url: String,
    pub id: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub total_episodes: usize,
    pub api_href: String,
    pub limit: usize,
    pub next: Option<i64>,
    pub offset: Option<i64>,
    pub previous: Option<i64>,
    pub total: usize,
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub id: Option<String>,
    pub url: Option<String>,
    pub channel: Option<String>,
    pub channel_url: Option<String>,
    pub upload_date: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub release_timestamp: Option<i64>,
    pub is_live: bool,
    pub item_type: ItemType,
}

// `/youtube` responses, tagged by which branch the input was routed to.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LookupResponse {
    Video {
        result: SearchResultItem,
    },
    Playlist {
        title: Option<String>,
        total_found: usize,
        results: Vec<SearchResultItem>,
    },
    Search {
        query: String,
        page: usize,
        per_page: usize,
        total_found: usize,
        results: Vec<SearchResultItem>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub yt_dlp_version: String,
    pub total_extractors: usize,
}
