mod api;
mod config;
mod errors;
mod models;
mod youtube;
mod ytdlp;
#[cfg(test)]
mod test_support;

use std::error::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::api::AppState;
use crate::config::Config;
use crate::ytdlp::YtDlp;

const LOG_FILE_PREFIX: &str = "ytdlp-gateway.log";

fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().json().with_writer(writer)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let _guard = init_tracing(&config);

    let ytdlp = YtDlp::new(&config.ytdlp_bin);
    match ytdlp.version().await {
        Ok(version) => tracing::info!(%version, "found yt-dlp"),
        Err(e) => tracing::warn!(error = %e, "yt-dlp is not usable, requests will fail until it is"),
    }

    let app = api::create_router(AppState {
        ytdlp,
        playlist_concurrency: config.playlist_concurrency,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "server starting");

    axum::serve(listener, app).await?;
    Ok(())
}
