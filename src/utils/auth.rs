use crate::utils::error::Result;
use reqwest::RequestBuilder;

/// Credential seam for outgoing requests.
///
/// Token acquisition and refresh are left to the caller; implementations
/// here only attach already-obtained credentials. The trait is async so an
/// implementation that refreshes tokens can slot in without changing the
/// client.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder>;
}

/// No credentials; useful against local mock servers.
#[derive(Debug, Clone, Default)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authenticator for NoAuth {
    async fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request)
    }
}

/// Static bearer token, e.g. an IAM access token obtained out of band.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for BearerAuth {
    async fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.bearer_auth(&self.token))
    }
}

/// HTTP basic credentials.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for BasicAuth {
    async fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request.basic_auth(&self.username, Some(&self.password)))
    }
}
