//! Backend endpoint configuration parsed from environment variables.

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Backend origin without a trailing slash, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    pub timeouts: BackendTimeouts,
}

impl BackendConfig {
    /// Build typed backend config from environment variables.
    ///
    /// All values are optional:
    /// - `LINGOLENS_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `LINGOLENS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `LINGOLENS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Unparseable timeout values fall back to their defaults rather than
    /// failing startup.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: normalize_base_url(std::env::var("LINGOLENS_BASE_URL").ok().as_deref()),
            timeouts: BackendTimeouts {
                request_secs: parse_secs(
                    std::env::var("LINGOLENS_REQUEST_TIMEOUT_SECS").ok().as_deref(),
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                ),
                connect_secs: parse_secs(
                    std::env::var("LINGOLENS_CONNECT_TIMEOUT_SECS").ok().as_deref(),
                    DEFAULT_CONNECT_TIMEOUT_SECS,
                ),
            },
        }
    }

    /// Replace the base URL, normalizing it the same way `from_env` does.
    #[must_use]
    pub fn with_base_url(self, base_url: &str) -> Self {
        Self { base_url: normalize_base_url(Some(base_url)), ..self }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: BackendTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

/// Trim whitespace and trailing slashes from a configured base URL,
/// defaulting when unset or blank.
fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map_or("", str::trim);
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.trim_end_matches('/').to_string()
    }
}

fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
