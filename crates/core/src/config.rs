//! Client configuration: where the search backend lives and how long to wait
//! for it. Loaded from `videovault.toml`, overridable by `VIDEOVAULT_API_URL`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::error::ConfigError;

/// Backend root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Per-request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Name of the config file looked up in [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "videovault.toml";

/// Environment variable that overrides `base_url`.
pub const BASE_URL_ENV: &str = "VIDEOVAULT_API_URL";

/// Known keys in `videovault.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["base_url", "timeout_secs"];

/// Settings injected into [`SearchClient`](crate::client::SearchClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Always ends in `/` so endpoint paths join underneath it.
    base_url: Url,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL)
                .unwrap_or_else(|_| unreachable!("default base URL is valid")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn set_base_url(&mut self, base_url: &str) -> Result<(), ConfigError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(())
    }

    /// Base URL as the user would write it, without the trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Absolute URL for an endpoint path relative to the base, e.g. `videos/search`.
    pub fn endpoint(&self, path: &str) -> Url {
        // Joining a relative path onto a base that ends in '/' can't fail.
        self.base_url
            .join(path.trim_start_matches('/'))
            .unwrap_or_else(|_| self.base_url.clone())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let url = Url::parse(&with_slash).map_err(|_| ConfigError::InvalidBaseUrl(raw.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Platform paths
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.videovault` on Unix, `%APPDATA%/videovault` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("videovault"))
    } else {
        home_dir().map(|h| h.join(".videovault"))
    }
}

// ---------------------------------------------------------------------------
// videovault.toml loading
// ---------------------------------------------------------------------------

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_key(key: &str) {
    let closest = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
    match closest {
        Some(suggestion) if edit_distance(key, suggestion) <= 3 => {
            warn!(
                key,
                suggestion = *suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            );
        }
        _ => {
            warn!(
                key,
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }
}

/// Parse the contents of a `videovault.toml` on top of the defaults.
///
/// Invalid values are warned about and skipped; the rest of the file still applies.
pub fn parse_config(content: &str) -> ClientConfig {
    let mut config = ClientConfig::default();

    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE_NAME}");
            return config;
        }
    };

    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            warn_unknown_key(key);
        }
    }

    if let Some(url) = table.get("base_url").and_then(|v| v.as_str()) {
        if let Err(e) = config.set_base_url(url) {
            warn!(error = %e, "Ignoring base_url");
        }
    }

    if let Some(secs) = table.get("timeout_secs").and_then(|v| v.as_integer()) {
        match u64::try_from(secs) {
            Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
            _ => warn!(timeout_secs = secs, "Ignoring non-positive timeout_secs"),
        }
    }

    config
}

/// Load client configuration from `videovault.toml` in `dir`.
///
/// Returns defaults if the file doesn't exist or can't be read.
pub fn load_config(dir: &Path) -> ClientConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return ClientConfig::default();
    }
    debug!(path = %path.display(), "Loading {CONFIG_FILE_NAME}");
    match std::fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read config file");
            ClientConfig::default()
        }
    }
}

/// Apply a `VIDEOVAULT_API_URL`-style override. Invalid values are warned
/// about and leave the config unchanged.
pub fn apply_base_url_override(mut config: ClientConfig, value: Option<&str>) -> ClientConfig {
    if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
        match config.set_base_url(url) {
            Ok(()) => debug!(base_url = config.base_url(), "Base URL overridden from {BASE_URL_ENV}"),
            Err(e) => warn!(error = %e, "Ignoring {BASE_URL_ENV}"),
        }
    }
    config
}

/// Full resolution used by the app: config dir file, then environment.
pub fn resolve_config() -> ClientConfig {
    let config = config_dir().map(|d| load_config(&d)).unwrap_or_default();
    let env = std::env::var(BASE_URL_ENV).ok();
    apply_base_url_override(config, env.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:8080/api");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn endpoints_nest_under_base_path() {
        let config = ClientConfig::new("http://localhost:8080/api").unwrap();
        assert_eq!(
            config.endpoint("videos/search").as_str(),
            "http://localhost:8080/api/videos/search"
        );
        let config = ClientConfig::new("https://vault.example.com/api/").unwrap();
        assert_eq!(
            config.endpoint("/videos/categories").as_str(),
            "https://vault.example.com/api/videos/categories"
        );
    }

    #[test]
    fn rejects_non_http_base_urls() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(ClientConfig::new("not a url").is_err());
        assert!(ClientConfig::new("").is_err());
    }

    #[test]
    fn parse_config_reads_known_keys() {
        let config = parse_config("base_url = \"http://10.0.0.5:9000/api\"\ntimeout_secs = 3\n");
        assert_eq!(config.base_url(), "http://10.0.0.5:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn parse_config_skips_bad_values() {
        let config = parse_config("base_url = \"gopher://x\"\ntimeout_secs = -4\nbase_ur = 1\n");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn parse_config_tolerates_garbage() {
        assert_eq!(parse_config("this is = = not toml"), ClientConfig::default());
    }

    #[test]
    fn load_config_reads_file_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "base_url = \"http://127.0.0.1:1/x\"").unwrap();
        assert_eq!(load_config(dir.path()).base_url(), "http://127.0.0.1:1/x");
    }

    #[test]
    fn load_config_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(dir.path()), ClientConfig::default());
    }

    #[test]
    fn override_replaces_base_url_only_when_valid() {
        let base = ClientConfig::default().with_timeout(Duration::from_secs(2));
        let over = apply_base_url_override(base.clone(), Some("http://backend:8080/api"));
        assert_eq!(over.base_url(), "http://backend:8080/api");
        assert_eq!(over.timeout, Duration::from_secs(2));

        assert_eq!(apply_base_url_override(base.clone(), Some("::bad::")), base);
        assert_eq!(apply_base_url_override(base.clone(), Some("  ")), base);
        assert_eq!(apply_base_url_override(base.clone(), None), base);
    }

    #[test]
    fn edit_distance_suggests_close_keys() {
        assert_eq!(edit_distance("base_ur", "base_url"), 1);
        assert_eq!(edit_distance("timeout", "timeout_secs"), 5);
    }
}
