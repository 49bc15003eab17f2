use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use crate::errors::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_PROGRAM: &str = "yt-dlp";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub ytdlp_bin: String,
    pub playlist_concurrency: usize,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind
            .parse()
            .map_err(|_| ConfigError::BindAddress(bind.clone()))?;

        let playlist_concurrency = match lookup("PLAYLIST_CONCURRENCY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(ConfigError::Concurrency(raw)),
            },
            None => 1,
        };

        Ok(Config {
            bind_address,
            ytdlp_bin: lookup("YTDLP_BIN")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
            playlist_concurrency,
            log_dir: lookup("LOG_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.ytdlp_bin, "yt-dlp");
        assert_eq!(config.playlist_concurrency, 1);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("YTDLP_BIN", "/opt/bin/yt-dlp"),
            ("PLAYLIST_CONCURRENCY", "4"),
            ("LOG_DIR", "/var/log/gateway"),
        ])
        .unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.ytdlp_bin, "/opt/bin/yt-dlp");
        assert_eq!(config.playlist_concurrency, 4);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/gateway")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            config_from(&[("BIND_ADDRESS", "nowhere")]),
            Err(ConfigError::BindAddress(_))
        ));
        assert!(matches!(
            config_from(&[("PLAYLIST_CONCURRENCY", "0")]),
            Err(ConfigError::Concurrency(_))
        ));
        assert!(matches!(
            config_from(&[("PLAYLIST_CONCURRENCY", "many")]),
            Err(ConfigError::Concurrency(_))
        ));
    }
}
