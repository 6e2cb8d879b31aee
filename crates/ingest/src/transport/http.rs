use super::{ReviewRequest, ReviewResponse, ReviewTransport, TransportError};
use crate::config::ReviewConfig;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport for the review service.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &ReviewConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: format!("{}{}", config.base_url, config.endpoint),
        })
    }
}

#[async_trait]
impl ReviewTransport for HttpTransport {
    async fn submit(&self, request: ReviewRequest) -> Result<ReviewResponse, TransportError> {
        #[derive(Serialize)]
        struct Payload<'a> {
            code: &'a str,
            streaming: bool,
        }

        debug!(url = %self.url, streaming = request.streaming, "submitting review request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&request.credential)
            .json(&Payload {
                code: &request.code,
                streaming: request.streaming,
            })
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| TransportError::Body(e.to_string())));

        Ok(ReviewResponse {
            status,
            body: Box::pin(body),
        })
    }
}
