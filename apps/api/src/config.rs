use anyhow::{Context, Result};

const DEFAULT_JOB_LISTING_API_URL: &str = "https://api.adzuna.com/v1/api/jobs/us/search/1";

/// Application configuration loaded from environment variables.
///
/// Credentials are optional: a missing `ANTHROPIC_API_KEY` leaves the
/// preparation pipeline uninitialized, and missing Adzuna credentials leave
/// the job-listing lookup uninitialized. Dependent routes answer 503.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub job_listing_api_url: String,
    pub collaborator_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            adzuna_app_id: optional_env("ADZUNA_APP_ID"),
            adzuna_app_key: optional_env("ADZUNA_APP_KEY"),
            job_listing_api_url: optional_env("JOB_LISTING_API_URL")
                .unwrap_or_else(|| DEFAULT_JOB_LISTING_API_URL.to_string()),
            collaborator_timeout_secs: parse_env("COLLABORATOR_TIMEOUT_SECS", 60)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by router tests: no credentials, short timeouts.
    pub fn for_tests() -> Self {
        Config {
            anthropic_api_key: None,
            adzuna_app_id: None,
            adzuna_app_key: None,
            job_listing_api_url: DEFAULT_JOB_LISTING_API_URL.to_string(),
            collaborator_timeout_secs: 5,
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
