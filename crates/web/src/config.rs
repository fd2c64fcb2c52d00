use chrono_tz::Tz;
use vendorwize_core::formatting::parse_timezone;

/// Upstream API used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api-production-7a33.up.railway.app";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Base URL of the upstream events API, without a trailing slash.
    pub api_url: String,
    /// Upstream request timeout in seconds. `None` keeps the HTTP client default.
    pub upstream_timeout_secs: Option<u64>,
    /// Zone event dates are displayed in (default: `America/New_York`).
    pub display_timezone: Tz,
    /// Place name shown when the request does not specify coordinates.
    pub default_location_label: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                        |
    /// |--------------------------|------------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                      |
    /// | `PORT`                   | `3000`                                         |
    /// | `API_URL`                | `https://api-production-7a33.up.railway.app`   |
    /// | `UPSTREAM_TIMEOUT_SECS`  | unset                                          |
    /// | `DISPLAY_TIMEZONE`       | `America/New_York`                             |
    /// | `DEFAULT_LOCATION_LABEL` | `Raleigh, NC`                                  |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let api_url = std::env::var("API_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let upstream_timeout_secs: Option<u64> = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64")
            });

        let display_timezone = parse_timezone(
            &std::env::var("DISPLAY_TIMEZONE").unwrap_or_else(|_| "America/New_York".into()),
        )
        .unwrap_or_else(|e| panic!("DISPLAY_TIMEZONE is invalid: {e}"));

        let default_location_label =
            std::env::var("DEFAULT_LOCATION_LABEL").unwrap_or_else(|_| "Raleigh, NC".into());

        Self {
            host,
            port,
            api_url,
            upstream_timeout_secs,
            display_timezone,
            default_location_label,
        }
    }
}
