//! Job-listing lookup: thin pass-through to an Adzuna-compatible search API.
//!
//! The payload is returned to the caller untouched; this service adds only
//! credentials and error mapping.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

pub mod handlers;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum JobListingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("job listing API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Clone)]
pub struct JobListingClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl JobListingClient {
    pub fn new(base_url: String, app_id: String, app_key: String) -> Result<Self, JobListingError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            app_id,
            app_key,
        })
    }

    /// Searches listings by title keywords and optional location.
    pub async fn search(
        &self,
        job_title: &str,
        location: &str,
    ) -> Result<serde_json::Value, JobListingError> {
        debug!("Searching job listings: what='{job_title}' where='{location}'");
        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(job_title, location))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Job listing API returned {status}");
            return Err(JobListingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    fn query_params<'a>(&'a self, job_title: &'a str, location: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("app_id", self.app_id.as_str()),
            ("app_key", self.app_key.as_str()),
            ("what", job_title),
            ("where", location),
            ("content-type", "application/json"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_carry_credentials_and_terms() {
        let client = JobListingClient::new(
            "https://api.adzuna.com/v1/api/jobs/us/search/1".to_string(),
            "id-123".to_string(),
            "key-456".to_string(),
        )
        .unwrap();
        let params = client.query_params("rust engineer", "Berlin");
        assert!(params.contains(&("app_id", "id-123")));
        assert!(params.contains(&("app_key", "key-456")));
        assert!(params.contains(&("what", "rust engineer")));
        assert!(params.contains(&("where", "Berlin")));
    }

    #[test]
    fn test_api_error_message_includes_status() {
        let err = JobListingError::Api {
            status: 401,
            message: "bad credentials".to_string(),
        };
        assert!(err.to_string().contains("401"));
    }
}
