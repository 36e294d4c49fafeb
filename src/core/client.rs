use crate::config::ClientConfig;
use crate::utils::auth::{Authenticator, NoAuth};
use crate::utils::error::{DirectLinkError, Result};
use crate::utils::validation::Validate;
use reqwest::header::{CONTENT_TYPE, ETAG, IF_MATCH};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub(crate) const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

/// A response value paired with the `ETag` header it arrived with, for
/// operations whose result feeds a later `If-Match` replace.
#[derive(Debug, Clone)]
pub struct WithEtag<T> {
    pub value: T,
    pub etag: Option<String>,
}

/// Client for the Direct Link v1 API.
///
/// One method per REST operation; methods live in per-resource `impl`
/// blocks under `core/`. Every request carries the dated `version` query
/// parameter from the configuration.
pub struct DirectLink {
    client: Client,
    config: ClientConfig,
    authenticator: Arc<dyn Authenticator>,
}

impl DirectLink {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_authenticator(config, Arc::new(NoAuth))
    }

    pub fn with_authenticator(
        config: ClientConfig,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            authenticator,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        let request = request.query(&[("version", self.config.version.as_str())]);
        let request = self.authenticator.apply(request).await?;

        tracing::debug!("{} {}", method, path);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {} -> {}", method, path, status);

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DirectLinkError::from_response(status.as_u16(), &body))
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.client.get(self.url(path)).query(query);
        let response = self.send(Method::GET, path, request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn get_json_with_etag<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<WithEtag<T>> {
        let request = self.client.get(self.url(path));
        let response = self.send(Method::GET, path, request).await?;
        let etag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        Ok(WithEtag {
            value: response.json().await?,
            etag,
        })
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let request = self.client.get(self.url(path));
        let response = self.send(Method::GET, path, request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.send(Method::POST, path, request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        if_match: Option<&str>,
    ) -> Result<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(etag) = if_match {
            request = request.header(IF_MATCH, etag);
        }
        let response = self.send(Method::PUT, path, request).await?;
        Ok(response.json().await?)
    }

    /// PATCH with a JSON Merge-Patch body (RFC 7396). The body is
    /// serialized by hand so the content type is not the plain
    /// `application/json` that `RequestBuilder::json` would set.
    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let payload = serde_json::to_vec(body)?;
        let request = self
            .client
            .patch(self.url(path))
            .header(CONTENT_TYPE, MERGE_PATCH_CONTENT_TYPE)
            .body(payload);
        let response = self.send(Method::PATCH, path, request).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self.client.delete(self.url(path));
        self.send(Method::DELETE, path, request).await?;
        Ok(())
    }

    pub(crate) async fn put_pdf_upload(
        &self,
        path: &str,
        file_name: &str,
        pdf: Vec<u8>,
    ) -> Result<()> {
        let part = Part::bytes(pdf)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("upload", part);
        let request = self.client.put(self.url(path)).multipart(form);
        self.send(Method::PUT, path, request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::auth::BearerAuth;
    use httpmock::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Pong {
        ok: bool,
    }

    fn test_client(server: &MockServer) -> DirectLink {
        DirectLink::new(ClientConfig::new(server.base_url(), "2024-10-30")).unwrap()
    }

    #[tokio::test]
    async fn test_version_query_param_on_every_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ping")
                .query_param("version", "2024-10-30");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ok": true}));
        });

        let client = test_client(&server);
        let pong: Pong = client.get_json("/ping", &[]).await.unwrap();

        mock.assert();
        assert!(pong.ok);
    }

    #[tokio::test]
    async fn test_bearer_token_applied() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ping")
                .header("Authorization", "Bearer my-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ok": true}));
        });

        let client = DirectLink::with_authenticator(
            ClientConfig::new(server.base_url(), "2024-10-30"),
            Arc::new(BearerAuth::new("my-token")),
        )
        .unwrap();
        let _: Pong = client.get_json("/ping", &[]).await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_merge_patch_content_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/thing")
                .header("Content-Type", MERGE_PATCH_CONTENT_TYPE)
                .json_body(serde_json::json!({"name": "patched"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ok": true}));
        });

        let client = test_client(&server);
        let _: Pong = client
            .patch_json("/thing", &serde_json::json!({"name": "patched"}))
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_error_envelope_mapped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "errors": [{"code": "not_found", "message": "Cannot find Gateway"}],
                    "trace": "trace-id-1"
                }));
        });

        let client = test_client(&server);
        let err = client.get_json::<Pong>("/missing", &[]).await.unwrap_err();

        match err {
            DirectLinkError::ApiResponseError {
                status,
                message,
                trace,
                errors,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Cannot find Gateway");
                assert_eq!(trace.as_deref(), Some("trace-id-1"));
                assert_eq!(errors[0].code, "not_found");
            }
            other => panic!("expected ApiResponseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_etag_captured_from_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tagged");
            then.status(200)
                .header("Content-Type", "application/json")
                .header("ETag", "W/\"abc123\"")
                .json_body(serde_json::json!({"ok": true}));
        });

        let client = test_client(&server);
        let tagged: WithEtag<Pong> = client.get_json_with_etag("/tagged").await.unwrap();

        assert_eq!(tagged.etag.as_deref(), Some("W/\"abc123\""));
        assert!(tagged.value.ok);
    }

    #[tokio::test]
    async fn test_invalid_config_rejected_at_construction() {
        let config = ClientConfig::new("not-a-url", "2024-10-30");
        assert!(DirectLink::new(config).is_err());
    }
}
