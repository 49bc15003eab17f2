use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use crate::ytdlp::YtDlp;

/// A stand-in for yt-dlp: a shell script whose body sees the real argument
/// list in `$@`. Every invocation is appended to `calls.log` next to it.
pub struct FakeYtDlp {
    dir: TempDir,
    script: PathBuf,
}

impl FakeYtDlp {
    pub fn new(body: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let script = dir.path().join("yt-dlp.sh");
        let log = dir.path().join("calls.log");
        let contents = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\n{}\n",
            log.display(),
            body
        );
        fs::write(&script, contents).expect("write fake yt-dlp");
        FakeYtDlp { dir, script }
    }

    pub fn ytdlp(&self) -> YtDlp {
        YtDlp::new(&format!("sh {}", self.script.display()))
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Playlist `PL123`: four flat entries plus a `null`; `bad` and `x4` fail
/// their full fetch, `x4` also lacks the `url` type tag.
pub const PLAYLIST_SCRIPT: &str = r#"case "$*" in
  *"--playlist-items 0"*)
    echo '{"id": "PL123", "title": "Mix", "uploader": "Someone", "description": "a mix", "thumbnails": [{"url": "small", "width": 1, "height": 1}, {"url": "big", "width": 10, "height": 10}]}' ;;
  *--flat-playlist*)
    echo '{"id": "PL123", "_type": "playlist", "title": "Mix", "entries": [{"_type": "url", "id": "v1", "title": "One", "url": "https://www.youtube.com/watch?v=v1", "duration": 60}, {"_type": "url", "id": "bad", "title": "Two"}, null, {"_type": "url", "id": "v3", "title": "Three", "duration": 90, "live_status": "was_live"}, {"id": "x4", "title": "Four"}]}' ;;
  *"watch?v=v1"*)
    echo '{"id": "v1", "title": "One", "description": "first", "duration": 60}' ;;
  *"watch?v=v3"*)
    echo '{"id": "v3", "title": "Three", "description": "third", "duration": 90.5}' ;;
  *)
    echo "ERROR: [youtube] Video unavailable" >&2; exit 1 ;;
esac"#;

/// Channel `UCabc123` whose uploads playlist holds two entries.
pub const CHANNEL_SCRIPT: &str = r#"case "$*" in
  *"--playlist-items 0"*)
    echo '{"id": "@chan", "channel_id": "UCabc123", "channel": "Chan", "uploader": "Chan Uploader", "description": "about", "thumbnails": [{"url": "avatar"}]}' ;;
  *"playlist?list=UUabc123"*)
    echo '{"id": "UUabc123", "entries": [{"_type": "url", "id": "u1", "title": "Upload 1"}, {"_type": "url", "id": "u2", "title": "Upload 2"}]}' ;;
  *)
    echo "ERROR: unexpected call" >&2; exit 1 ;;
esac"#;

/// Answers `ytsearchN:term` with min(N, 25) results, the first one live.
pub const SEARCH_SCRIPT: &str = r#"for arg; do last=$arg; done
case "$last" in
  ytsearch*)
    n=${last#ytsearch}; n=${n%%:*}
    [ "$n" -gt 25 ] && n=25
    i=1
    while [ "$i" -le "$n" ]; do
      if [ "$i" -eq 1 ]; then live=true; else live=false; fi
      printf '{"_type": "url", "id": "s%d", "title": "Result %d", "url": "https://www.youtube.com/watch?v=s%d", "channel": "C", "channel_url": "https://www.youtube.com/channel/UCc", "duration": %d, "is_live": %s, "thumbnails": [{"url": "t%d"}]}\n' "$i" "$i" "$i" "$i" "$live" "$i"
      i=$((i + 1))
    done ;;
  *)
    echo "ERROR: unexpected call" >&2; exit 1 ;;
esac"#;
