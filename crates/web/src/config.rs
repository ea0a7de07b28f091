use kiglist_client::http::DEFAULT_API_BASE_URL;
use kiglist_core::locale::{LocaleSet, DEFAULT_BASE_LOCALE, DEFAULT_LOCALES};

/// Default public URL of the site, used for canonical and sitemap URLs.
pub const DEFAULT_SITE_URL: &str = "https://kiglist.com";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Inbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout for calls to the kiglist API in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
    /// Base URL of the kiglist API, without trailing slash.
    pub api_base_url: String,
    /// Public site URL, without trailing slash.
    pub site_url: String,
    /// Locales the site is served in.
    pub locales: LocaleSet,
}

impl WebConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                       |
    /// | `API_BASE_URL`          | `http://localhost:8001`    |
    /// | `SITE_URL`              | `https://kiglist.com`      |
    /// | `LOCALES`               | `en,zh-tw,zh-cn`           |
    /// | `BASE_LOCALE`           | `en`                       |
    ///
    /// # Panics
    ///
    /// Panics on unparsable numbers or a base locale missing from `LOCALES`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = split_list(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| DEFAULT_SITE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let locales = split_list(
            &std::env::var("LOCALES").unwrap_or_else(|_| DEFAULT_LOCALES.join(",")),
        );
        let base_locale =
            std::env::var("BASE_LOCALE").unwrap_or_else(|_| DEFAULT_BASE_LOCALE.into());
        let locales = LocaleSet::new(locales, &base_locale)
            .unwrap_or_else(|e| panic!("Invalid LOCALES/BASE_LOCALE: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upstream_timeout_secs,
            api_base_url,
            site_url,
            locales,
        }
    }

    /// Absolute URL of a site path, e.g. `https://kiglist.com/kiger/p1`.
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}{path}", self.site_url)
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
