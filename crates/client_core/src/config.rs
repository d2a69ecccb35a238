use url::Url;

/// Environment variable supplying the analysis service base URL.
pub const API_URL_ENV: &str = "JOBSCAN_API_URL";

/// Local-development fallback used when no deployment URL is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
        }
    }
}

/// Resolves the analysis service base URL once at startup. This is the entire
/// external configuration surface.
pub fn load_settings() -> Settings {
    Settings {
        api_base_url: resolve_base_url(std::env::var(API_URL_ENV).ok().as_deref()),
    }
}

fn resolve_base_url(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DEFAULT_API_URL.to_string();
    };

    let trimmed = raw.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(_) => trimmed.to_string(),
        Err(err) => {
            tracing::warn!("ignoring malformed {API_URL_ENV}={raw:?}: {err}");
            DEFAULT_API_URL.to_string()
        }
    }
}
