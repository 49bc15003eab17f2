use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum YtDlpError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("yt-dlp exited with {code:?}: {stderr}")]
    Execution {
        command: Vec<String>,
        code: Option<i32>,
        stderr: String,
    },
    #[error("Invalid JSON from yt-dlp: {message}")]
    Decode {
        message: String,
        output: String,
    },
    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl YtDlpError {
    pub(crate) fn decode(err: serde_json::Error, output: &str) -> Self {
        YtDlpError::Decode {
            message: err.to_string(),
            output: output.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDRESS {0:?}")]
    BindAddress(String),
    #[error("PLAYLIST_CONCURRENCY must be an integer >= 1, got {0:?}")]
    Concurrency(String),
}
