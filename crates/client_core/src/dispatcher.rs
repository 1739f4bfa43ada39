use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use shared::{
    domain::Preferences,
    error::ApiException,
    protocol::{HealthStatus, LearningPathway, GENERATE_PATHWAY_PATH, HEALTH_PATH},
};
use tracing::{info, warn};

use crate::{
    config::{normalize_base_url, ClientSettings},
    error::DispatchError,
};

/// Produces a learning pathway for a set of preferences. One attempt per call.
#[async_trait]
pub trait PathwayGenerator: Send + Sync {
    async fn generate(&self, preferences: &Preferences) -> Result<LearningPathway, DispatchError>;
}

#[async_trait]
impl<G: PathwayGenerator + ?Sized> PathwayGenerator for std::sync::Arc<G> {
    async fn generate(&self, preferences: &Preferences) -> Result<LearningPathway, DispatchError> {
        (**self).generate(preferences).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpPathwayClient {
    http: Client,
    base_url: String,
}

impl HttpPathwayClient {
    pub fn new(base_url: &str) -> Result<Self, DispatchError> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, DispatchError> {
        Self::build(settings, Client::builder())
    }

    /// Same as [`Self::from_settings`] but ignores proxy environment variables.
    #[cfg(test)]
    pub(crate) fn from_settings_direct(settings: &ClientSettings) -> Result<Self, DispatchError> {
        Self::build(settings, Client::builder().no_proxy())
    }

    fn build(settings: &ClientSettings, mut builder: ClientBuilder) -> Result<Self, DispatchError> {
        let base_url = normalize_base_url(&settings.api_base_url)?;
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(DispatchError::ClientSetup)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn health(&self) -> Result<HealthStatus, DispatchError> {
        let res = self
            .http
            .get(self.endpoint(HEALTH_PATH))
            .send()
            .await
            .map_err(DispatchError::Network)?;
        let status = res.status();
        if !status.is_success() {
            let body = res.bytes().await.unwrap_or_default();
            return Err(ApiException::from_body(status.as_u16(), &body).into());
        }
        let body = res.bytes().await.map_err(DispatchError::Network)?;
        serde_json::from_slice(&body).map_err(DispatchError::Decode)
    }
}

#[async_trait]
impl PathwayGenerator for HttpPathwayClient {
    async fn generate(&self, preferences: &Preferences) -> Result<LearningPathway, DispatchError> {
        info!(
            base_url = %self.base_url,
            topic = %preferences.topic,
            domain = %preferences.domain,
            "requesting learning pathway"
        );

        let res = self
            .http
            .post(self.endpoint(GENERATE_PATHWAY_PATH))
            .json(preferences)
            .send()
            .await
            .map_err(|err| {
                warn!("pathway request failed before a response arrived: {err}");
                DispatchError::Network(err)
            })?;

        let status = res.status();
        if !status.is_success() {
            // Error bodies are best effort; an unreadable body still yields a message.
            let body = res.bytes().await.unwrap_or_default();
            let exc = ApiException::from_body(status.as_u16(), &body);
            warn!(status = status.as_u16(), message = %exc.message, "pathway generation rejected");
            return Err(exc.into());
        }

        let body = res.bytes().await.map_err(DispatchError::Network)?;
        let pathway: LearningPathway = serde_json::from_slice(&body).map_err(|err| {
            warn!("pathway response did not decode: {err}");
            DispatchError::Decode(err)
        })?;
        info!(
            phases = pathway.phases.len(),
            links = pathway.relevant_links.len(),
            "learning pathway received"
        );
        Ok(pathway)
    }
}
