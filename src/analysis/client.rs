use log::{debug, warn};
use std::sync::Arc;

use super::endpoint::{CookEndpoint, Endpoint, NutritionEndpoint};
use super::parser;
use super::transport::{ReqwestTransport, Transport};
use crate::config::ControllerConfig;
use crate::model::{ErrorInfo, Mode, ModeResult};
use crate::ControllerError;

/// Sends analysis requests and classifies what comes back.
#[derive(Clone)]
pub struct AnalysisClient {
    transport: Arc<dyn Transport>,
    config: ControllerConfig,
}

impl AnalysisClient {
    /// Client backed by reqwest
    pub fn new(config: ControllerConfig) -> Result<Self, ControllerError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, config: ControllerConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Single attempt against endpoint `E` for `recipe_url`.
    pub async fn fetch<E: Endpoint>(&self, recipe_url: &str) -> Result<E::Output, ErrorInfo> {
        let endpoint_url = self.config.endpoint_url(E::MODE);
        debug!("Requesting {} analysis from {}", E::MODE, endpoint_url);

        let result = match self.transport.post_json(&endpoint_url, recipe_url).await {
            Ok(raw) => parser::parse::<E>(raw.status, &raw.body, recipe_url, raw.ok),
            Err(err) => Err(parser::transport_failure(recipe_url, err)),
        };

        if let Err(info) = &result {
            warn!(
                "{} analysis failed ({:?}, status {:?}): {}",
                E::MODE,
                info.kind,
                info.debug.as_ref().and_then(|d| d.status),
                info.user_message
            );
        }
        result
    }

    pub async fn fetch_mode(&self, mode: Mode, recipe_url: &str) -> Result<ModeResult, ErrorInfo> {
        match mode {
            Mode::Cook => self.fetch::<CookEndpoint>(recipe_url).await.map(Into::into),
            Mode::Nutrition => self
                .fetch::<NutritionEndpoint>(recipe_url)
                .await
                .map(Into::into),
        }
    }
}
