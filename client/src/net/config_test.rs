use super::*;

// --- normalize_base_url ---

#[test]
fn base_url_defaults_when_unset() {
    assert_eq!(normalize_base_url(None), DEFAULT_BASE_URL);
}

#[test]
fn base_url_defaults_when_blank() {
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_BASE_URL);
}

#[test]
fn base_url_strips_trailing_slash() {
    assert_eq!(normalize_base_url(Some("http://10.0.0.5:8000/")), "http://10.0.0.5:8000");
}

#[test]
fn base_url_strips_surrounding_whitespace() {
    // A leading space in a copied URL produced requests to a malformed
    // host; trimming keeps the config forgiving.
    assert_eq!(normalize_base_url(Some(" http://0.0.0.0:8000")), "http://0.0.0.0:8000");
}

#[test]
fn base_url_passes_through_clean_value() {
    assert_eq!(normalize_base_url(Some("https://api.example.com")), "https://api.example.com");
}

// --- parse_secs ---

#[test]
fn secs_parse_valid_value() {
    assert_eq!(parse_secs(Some("45"), 30), 45);
}

#[test]
fn secs_default_when_unset() {
    assert_eq!(parse_secs(None, 30), 30);
}

#[test]
fn secs_default_on_garbage() {
    assert_eq!(parse_secs(Some("soon"), 30), 30);
    assert_eq!(parse_secs(Some("-5"), 30), 30);
}

#[test]
fn secs_tolerate_whitespace() {
    assert_eq!(parse_secs(Some(" 60 "), 30), 60);
}

// --- constructors ---

#[test]
fn default_config_uses_documented_values() {
    let config = BackendConfig::default();
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.timeouts.request_secs, 30);
    assert_eq!(config.timeouts.connect_secs, 10);
}

#[test]
fn with_base_url_normalizes_and_keeps_timeouts() {
    let base = BackendConfig {
        base_url: DEFAULT_BASE_URL.to_string(),
        timeouts: BackendTimeouts { request_secs: 90, connect_secs: 5 },
    };

    let config = base.with_base_url("http://backend:8000/");

    assert_eq!(config.base_url, "http://backend:8000");
    assert_eq!(config.timeouts, BackendTimeouts { request_secs: 90, connect_secs: 5 });
}
