use axum::{
    routing::get,
    Router,
    Json,
    extract::{rejection::QueryRejection, Query, State},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use crate::models::{LookupResponse, PlaylistRecord, ToolInfo, VideoRecord};
use crate::youtube::{
    channels::get_channel_uploads,
    playlists::{get_flat_playlist, get_full_playlist},
    search::lookup,
    videos::get_video,
};
use super::types::{AppState, LookupQuery, UrlQuery};
use super::error::ApiError;

fn url_param(query: Result<Query<UrlQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    Ok(query.url)
}

async fn ping_handler() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

async fn ytdlp_handler(State(state): State<Arc<AppState>>) -> Result<Json<ToolInfo>, ApiError> {
    let yt_dlp_version = state.ytdlp.version().await?;
    let total_extractors = state.ytdlp.extractor_count().await?;

    Ok(Json(ToolInfo {
        yt_dlp_version,
        total_extractors,
    }))
}

async fn video_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UrlQuery>, QueryRejection>,
) -> Result<Json<VideoRecord>, ApiError> {
    let url = url_param(query)?;
    Ok(Json(get_video(&state.ytdlp, &url).await?))
}

async fn flatlist_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UrlQuery>, QueryRejection>,
) -> Result<Json<PlaylistRecord>, ApiError> {
    let url = url_param(query)?;
    Ok(Json(get_flat_playlist(&state.ytdlp, &url).await?))
}

async fn playlist_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UrlQuery>, QueryRejection>,
) -> Result<Json<PlaylistRecord>, ApiError> {
    let url = url_param(query)?;
    Ok(Json(get_full_playlist(&state.ytdlp, &url, state.playlist_concurrency).await?))
}

async fn channel_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UrlQuery>, QueryRejection>,
) -> Result<Json<PlaylistRecord>, ApiError> {
    let url = url_param(query)?;
    Ok(Json(get_channel_uploads(&state.ytdlp, &url).await?))
}

async fn youtube_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<LookupResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let (page, per_page) = query.paging().map_err(ApiError::InvalidRequest)?;

    // run detached so a panic while mapping still answers with an error body
    let ytdlp = state.ytdlp.clone();
    let task = tokio::spawn(async move { lookup(&ytdlp, &query.search, page, per_page).await });

    match task.await {
        Ok(Ok(response)) => Ok(Json(response)),
        Ok(Err(e)) => Err(ApiError::detailed(e)),
        Err(e) => {
            tracing::error!(error = %e, "lookup task failed");
            Err(ApiError::unexpected(e))
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/ytdlp", get(ytdlp_handler))
        .route("/video", get(video_handler))
        .route("/flatlist", get(flatlist_handler))
        .route("/playlist", get(playlist_handler))
        .route("/channel", get(channel_handler))
        .route("/youtube", get(youtube_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
