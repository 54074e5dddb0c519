//! HTTP implementation of the record service contract.

use crate::config::ClientConfig;
use async_trait::async_trait;
use journal_core::error::{CatalogError, Result};
use journal_core::types::RecordPayload;
use journal_core::RecordService;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the remote series store.
///
/// Implements [`RecordService`] against the original REST routes
/// (`GET/POST /series`, `GET/PUT/DELETE /series/{id}`). Responses come back
/// as raw JSON; normalization is the caller's job.
///
/// # Example
///
/// ```ignore
/// use journal_server_client::{ClientConfig, SeriesApiClient};
///
/// let client = SeriesApiClient::new(ClientConfig::new("http://localhost:5000"))?;
/// if client.probe().await {
///     let raw = client.fetch_all().await?;
/// }
/// ```
pub struct SeriesApiClient {
    http: Client,
    base_url: String,
}

impl SeriesApiClient {
    /// Create a new client with the given configuration.
    ///
    /// The URL is validated up front: it must parse, use an http(s) scheme,
    /// and is normalized without a trailing slash.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let parsed = Url::parse(&config.url)
            .map_err(|e| CatalogError::Transport(format!("invalid service URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(CatalogError::Transport(format!(
                "invalid service URL: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }
        let base_url = config.url.trim_end_matches('/').to_string();

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(format!("SeriesJournal/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The normalized service URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Test whether the service answers at all.
    ///
    /// Probes the service root; any response (even an error status) counts
    /// as reachable, only transport failures do not.
    pub async fn probe(&self) -> bool {
        debug!(url = %self.base_url, "Probing record service");
        match self.http.get(&self.base_url).send().await {
            Ok(response) => {
                info!(status = %response.status(), "Record service reachable");
                true
            }
            Err(e) => {
                info!(error = %e, "Record service unreachable");
                false
            }
        }
    }

    fn transport(e: reqwest::Error) -> CatalogError {
        if e.is_timeout() {
            CatalogError::Transport(format!("request timed out: {e}"))
        } else {
            CatalogError::Transport(e.to_string())
        }
    }

    /// Map a non-success response onto the catalog error kinds.
    ///
    /// 404 becomes `NotFound` only for id-addressed requests; on collection
    /// routes it means the service itself is misconfigured.
    async fn error_from(id: Option<&str>, response: Response) -> CatalogError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        match (status, id) {
            (404, Some(id)) => CatalogError::NotFound { id: id.to_string() },
            (400 | 422, _) => CatalogError::ValidationRejected(message),
            _ => CatalogError::Server { status, message },
        }
    }

    async fn json_body(response: Response) -> Result<Value> {
        response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl RecordService for SeriesApiClient {
    async fn fetch_all(&self) -> Result<Value> {
        let url = format!("{}/series", self.base_url);
        debug!(url = %url, "Fetching all series");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status().is_success() {
            Self::json_body(response).await
        } else {
            Err(Self::error_from(None, response).await)
        }
    }

    async fn fetch_one(&self, id: &str) -> Result<Value> {
        let url = format!("{}/series/{}", self.base_url, id);
        debug!(url = %url, id = %id, "Fetching series");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status().is_success() {
            Self::json_body(response).await
        } else {
            Err(Self::error_from(Some(id), response).await)
        }
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Value> {
        let url = format!("{}/series", self.base_url);
        debug!(url = %url, title = %payload.title, "Creating series");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status().is_success() {
            let body = Self::json_body(response).await?;
            info!(title = %payload.title, "Series created");
            Ok(body)
        } else {
            Err(Self::error_from(None, response).await)
        }
    }

    async fn update(&self, id: &str, payload: &RecordPayload) -> Result<Value> {
        let url = format!("{}/series/{}", self.base_url, id);
        debug!(url = %url, id = %id, "Updating series");

        let response = self
            .http
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status().is_success() {
            let body = Self::json_body(response).await?;
            info!(id = %id, "Series updated");
            Ok(body)
        } else {
            Err(Self::error_from(Some(id), response).await)
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/series/{}", self.base_url, id);
        debug!(url = %url, id = %id, "Deleting series");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(Self::transport)?;

        if response.status().is_success() {
            info!(id = %id, "Series deleted");
            Ok(())
        } else {
            Err(Self::error_from(Some(id), response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use journal_core::types::SeriesDraft;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SeriesApiClient {
        SeriesApiClient::new(ClientConfig::new(server.uri())).expect("valid mock server url")
    }

    fn dark_payload() -> RecordPayload {
        RecordPayload::from_draft(&SeriesDraft {
            title: "Dark".to_string(),
            season_count: Some(3),
            release_date: NaiveDate::from_ymd_opt(2017, 12, 1),
            director: "Baran bo Odar".to_string(),
            studio: "Netflix".to_string(),
            category: "Mystery".to_string(),
            watched_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            notes: String::new(),
        })
    }

    #[test]
    fn url_validation() {
        assert!(SeriesApiClient::new(ClientConfig::new("http://localhost:5000")).is_ok());
        assert!(SeriesApiClient::new(ClientConfig::new("https://example.com/")).is_ok());

        assert!(SeriesApiClient::new(ClientConfig::new("")).is_err());
        assert!(SeriesApiClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(SeriesApiClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization_trims_trailing_slash() {
        let client =
            SeriesApiClient::new(ClientConfig::new("http://localhost:5000/")).expect("valid url");
        assert_eq!(client.url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn fetch_all_returns_the_raw_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/series"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "1", "titulo": "Dark" },
            ])))
            .mount(&server)
            .await;

        let raw = client_for(&server).fetch_all().await.expect("fetch succeeds");
        assert_eq!(raw[0]["titulo"], "Dark");
    }

    #[tokio::test]
    async fn create_sends_the_wire_payload_shape() {
        let server = MockServer::start().await;
        let expected_body = json!({
            "titulo": "Dark",
            "numeroTemporadas": 3,
            "dataLancamento": "2017-12-01",
            "diretor": "Baran bo Odar",
            "produtora": "Netflix",
            "categoria": "Mystery",
            "dataAssistida": "2024-05-01",
            "observacoes": "",
        });
        let mut echoed = expected_body.clone();
        echoed["id"] = json!("abc1");

        Mock::given(method("POST"))
            .and(path("/series"))
            .and(body_json(&expected_body))
            .respond_with(ResponseTemplate::new(201).set_body_json(echoed))
            .expect(1)
            .mount(&server)
            .await;

        let raw = client_for(&server)
            .create(&dark_payload())
            .await
            .expect("create succeeds");
        assert_eq!(raw["id"], "abc1");
    }

    #[tokio::test]
    async fn missing_record_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/series/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .delete("ghost")
            .await
            .expect_err("must fail");
        match err {
            CatalogError::NotFound { id } => assert_eq!(id, "ghost"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rejected_payload_maps_to_validation_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/series"))
            .respond_with(ResponseTemplate::new(422).set_body_string("categoria invalida"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create(&dark_payload())
            .await
            .expect_err("must fail");
        match err {
            CatalogError::ValidationRejected(message) => {
                assert_eq!(message, "categoria invalida");
            }
            other => panic!("expected ValidationRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_failure_maps_to_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/series"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_all()
            .await
            .expect_err("must fail");
        match err {
            CatalogError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_hits_the_id_route() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/series/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "s1" })))
            .expect(1)
            .mount(&server)
            .await;

        let raw = client_for(&server)
            .update("s1", &dark_payload())
            .await
            .expect("update succeeds");
        assert_eq!(raw["id"], "s1");
    }

    #[tokio::test]
    async fn probe_reports_reachability() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(client_for(&server).probe().await);

        let unreachable = SeriesApiClient::new(ClientConfig::new("http://127.0.0.1:1"))
            .expect("valid url");
        assert!(!unreachable.probe().await);
    }
}
