use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::HttpSettings;
use crate::domain::models::SeoMetadata;
use crate::error::{AppError, Result};

/// Build the HTTP client used to fetch pages for scoring.
pub fn create_client(settings: &HttpSettings) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|e| AppError::network(format!("Failed to build HTTP client: {}", e)))
}

/// Fetch a page body. Non-success statuses are errors.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| AppError::InvalidUrl(format!("{}: {}", url, e)))?;
    debug!("Fetching HTML from {}", parsed);

    let response = client.get(parsed.as_str()).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("Failed to fetch {}: {}", parsed, status);
        return Err(AppError::HttpStatus {
            url: parsed.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

/// Fetch a page and read its SEO metadata.
pub async fn fetch_seo(client: &Client, url: &str) -> Result<SeoMetadata> {
    let html = fetch_html(client, url).await?;
    Ok(SeoMetadata::from_html(&html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn client() -> Client {
        create_client(&HttpSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn fetches_and_extracts_metadata() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/courses")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(fixtures::page_html())
            .create_async()
            .await;

        let seo = fetch_seo(&client(), &format!("{}/courses", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(seo.og_title(), "Courses | Personal Wings");
    }

    #[tokio::test]
    async fn sends_configured_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "test-agent/1.0")
            .with_body("<html></html>")
            .create_async()
            .await;

        let settings = HttpSettings {
            user_agent: "test-agent/1.0".into(),
            ..Default::default()
        };
        let client = create_client(&settings).unwrap();
        fetch_html(&client, &format!("{}/", server.url())).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let err = fetch_html(&client(), &format!("{}/missing", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn rejects_invalid_url() {
        let err = fetch_html(&client(), "not a url").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(_)));
    }
}
