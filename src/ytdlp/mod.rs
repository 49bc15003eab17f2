use std::process::Stdio;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tokio::process::Command;
use crate::errors::YtDlpError;

const SEARCH_PREFIX: &str = "ytsearch";
const MAX_LOGGED_OUTPUT: usize = 2048;

/// A single `info_dict` as printed by yt-dlp. Every field is optional since
/// extractors differ in what they fill in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    pub id: Option<String>,
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub webpage_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    pub uploader_url: Option<String>,
    pub channel: Option<String>,
    pub channel_id: Option<String>,
    pub channel_url: Option<String>,
    pub thumbnail: Option<String>,
    pub thumbnails: Option<Value>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub view_count: Option<i64>,
    pub upload_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub release_timestamp: Option<i64>,
    pub is_live: Option<Value>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub entries: Option<Vec<Option<Info>>>,
}

impl Info {
    pub fn is_live(&self) -> bool {
        match &self.is_live {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(Value::Null) | None => false,
        }
    }

    /// Entries of a flat listing, skipping the `null` placeholders yt-dlp
    /// emits for unavailable items.
    pub fn entries(&self) -> impl Iterator<Item = &Info> {
        self.entries.iter().flatten().flatten()
    }
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Numbers arrive as ints, floats or numeric strings depending on the
/// extractor; anything else reads as absent.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
        Some(other) => number(&other).map(|n| n as i64),
        None => None,
    })
}

/// An entry that does not decode becomes a `null` placeholder instead of
/// failing the whole listing.
fn lenient_entries<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<Option<Info>>>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .map(|value| match serde_json::from_value::<Option<Info>>(value) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping undecodable entry");
                    None
                }
            })
            .collect()
    }))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DumpOptions {
    pub flat_playlist: bool,
    pub playlist_items: Option<u32>,
    pub no_playlist: bool,
}

impl DumpOptions {
    pub fn flat() -> Self {
        DumpOptions { flat_playlist: true, ..Default::default() }
    }

    pub fn metadata_only() -> Self {
        DumpOptions { playlist_items: Some(0), ..Default::default() }
    }

    pub fn single_video() -> Self {
        DumpOptions { no_playlist: true, ..Default::default() }
    }

    fn push_args(&self, args: &mut Vec<String>) {
        if self.flat_playlist {
            args.push("--flat-playlist".to_string());
        }
        if let Some(n) = self.playlist_items {
            args.push("--playlist-items".to_string());
            args.push(n.to_string());
        }
        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct YtDlp {
    program: String,
    base_args: Vec<String>,
}

impl YtDlp {
    /// `program` may carry leading arguments, e.g. `python3 -m yt_dlp`.
    pub fn new(program: &str) -> Self {
        let mut parts = program.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| "yt-dlp".to_string());
        YtDlp {
            program,
            base_args: parts.collect(),
        }
    }

    /// Full argv for an invocation, program first.
    pub fn command(&self, args: &[String]) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.base_args.iter().cloned())
            .chain(args.iter().cloned())
            .collect()
    }

    pub async fn run(&self, args: &[String]) -> Result<String, YtDlpError> {
        let command = self.command(args);
        tracing::debug!(?command, "running yt-dlp");

        let output = Command::new(&self.program)
            .args(&self.base_args)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| YtDlpError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(?command, code = ?output.status.code(), %stderr, "yt-dlp failed");
            return Err(YtDlpError::Execution {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub async fn dump_single_json(&self, url: &str, opts: DumpOptions) -> Result<Info, YtDlpError> {
        let stdout = self.run(&dump_args("--dump-single-json", url, opts)).await?;
        decode(&stdout)
    }

    /// `--dump-json` prints one object per line.
    pub async fn dump_json_lines(&self, target: &str, opts: DumpOptions) -> Result<Vec<Info>, YtDlpError> {
        let stdout = self.run(&dump_args("--dump-json", target, opts)).await?;
        stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(decode)
            .collect()
    }

    pub async fn search(&self, term: &str, count: usize) -> Result<Vec<Info>, YtDlpError> {
        self.dump_json_lines(&search_target(term, count), DumpOptions::flat()).await
    }

    pub async fn version(&self) -> Result<String, YtDlpError> {
        let stdout = self.run(&["--version".to_string()]).await?;
        Ok(stdout.trim().to_string())
    }

    pub async fn extractor_count(&self) -> Result<usize, YtDlpError> {
        let stdout = self.run(&["--list-extractors".to_string()]).await?;
        Ok(stdout.lines().filter(|line| !line.trim().is_empty()).count())
    }
}

fn dump_args(mode: &str, target: &str, opts: DumpOptions) -> Vec<String> {
    let mut args = vec![mode.to_string()];
    opts.push_args(&mut args);
    // keeps a target starting with '-' from being parsed as an option
    args.push("--".to_string());
    args.push(target.to_string());
    args
}

pub fn search_target(term: &str, count: usize) -> String {
    format!("{SEARCH_PREFIX}{count}:{term}")
}

fn decode(text: &str) -> Result<Info, YtDlpError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::debug!(output = %truncate(text, MAX_LOGGED_OUTPUT), "undecodable yt-dlp output");
        YtDlpError::decode(e, text)
    })
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
