//! Transport seam between the session and the review service
//!
//! Both the streaming and batch modes share the chunked-body representation;
//! the batch path simply collects the stream before decoding. Swapping the
//! reqwest-backed transport for the scripted mock is how the whole pipeline
//! is tested without a server.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

pub mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("error reading response body: {0}")]
    Body(String),
}

/// One review submission. The credential travels as a bearer header; the
/// session attaches no other meaning to it.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub code: String,
    pub credential: String,
    pub streaming: bool,
}

pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

pub struct ReviewResponse {
    pub status: u16,
    pub body: BodyStream,
}

impl std::fmt::Debug for ReviewResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl ReviewResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ReviewTransport: Send + Sync {
    /// Issue exactly one review request and hand back the raw response.
    /// Status interpretation is left to the caller.
    async fn submit(&self, request: ReviewRequest) -> Result<ReviewResponse, TransportError>;
}
