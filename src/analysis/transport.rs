use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::config::ControllerConfig;
use crate::ControllerError;

#[derive(Serialize)]
struct AnalyzeRequestBody<'a> {
    url: &'a str,
}

/// Whatever came back from an endpoint, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            body: body.into(),
        }
    }
}

/// Outbound POST of `{"url": ...}` to an analysis endpoint.
///
/// `Err` carries the stringified transport error when no response was
/// obtained at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, endpoint_url: &str, recipe_url: &str)
        -> Result<RawResponse, String>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ControllerConfig) -> Result<Self, ControllerError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        endpoint_url: &str,
        recipe_url: &str,
    ) -> Result<RawResponse, String> {
        let response = self
            .client
            .post(endpoint_url)
            .json(&AnalyzeRequestBody { url: recipe_url })
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        debug!(
            "POST {} -> {} ({} bytes)",
            endpoint_url,
            status.as_u16(),
            body.len()
        );

        Ok(RawResponse {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }
}
