use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::decode::decode_body;
use crate::{GatewayError, Operation};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    /// Only the connect phase may be bounded; an accepted call may take as long as it needs.
    pub connect_timeout: Option<Duration>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            connect_timeout: None,
        }
    }
}

/// One request/response cycle against a backend operation.
///
/// Implementations return the parsed body on success and classify failures as
/// [`GatewayError::Operation`] or [`GatewayError::Transport`]. No retries.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn call(&self, operation: Operation, body: Option<Value>) -> Result<Value, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    base_url: reqwest::Url,
    client: reqwest::Client,
}

impl ReqwestGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let invalid = |reason: String| GatewayError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            reason,
        };
        let base_url =
            reqwest::Url::parse(&settings.base_url).map_err(|err| invalid(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a base url".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| GatewayError::transport(err.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn endpoint(&self, operation: Operation) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            operation.path()
        )
    }
}

#[async_trait::async_trait]
impl Gateway for ReqwestGateway {
    async fn call(&self, operation: Operation, body: Option<Value>) -> Result<Value, GatewayError> {
        let mut request = self
            .client
            .request(operation.method(), self.endpoint(operation))
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            let bytes = serde_json::to_vec(&body)
                .map_err(|err| GatewayError::transport(err.to_string()))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_body(status.as_u16(), &bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_connect() {
        return GatewayError::transport(format!("backend unreachable: {err}"));
    }
    GatewayError::transport(err.to_string())
}
