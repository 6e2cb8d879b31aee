use super::{ReviewRequest, ReviewResponse, ReviewTransport, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted transport for driving the session in tests and demos.
///
/// Responds with a fixed status and a pre-cut sequence of body chunks, so
/// chunk-boundary behaviour is under the caller's control. Submissions are
/// recorded for later inspection.
pub struct MockTransport {
    status: u16,
    chunks: Vec<Result<Bytes, TransportError>>,
    submit_error: Option<TransportError>,
    call_count: AtomicUsize,
    requests: Mutex<Vec<ReviewRequest>>,
}

impl MockTransport {
    /// A 200 response delivered as a single chunk.
    pub fn with_body(body: &str) -> Self {
        Self::with_chunks(vec![body.as_bytes().to_vec()])
    }

    /// A 200 response delivered chunk by chunk, exactly as given.
    pub fn with_chunks(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            status: 200,
            chunks: chunks.into_iter().map(|c| Ok(Bytes::from(c))).collect(),
            submit_error: None,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A response with the given status and an empty body.
    pub fn with_status(status: u16) -> Self {
        let mut transport = Self::with_chunks(Vec::new());
        transport.status = status;
        transport
    }

    /// Fails the submission itself, before any response is produced.
    pub fn failing(message: &str) -> Self {
        let mut transport = Self::with_chunks(Vec::new());
        transport.submit_error = Some(TransportError::Network(message.to_string()));
        transport
    }

    /// Appends a mid-stream body failure after the scripted chunks.
    pub fn with_body_error(mut self, message: &str) -> Self {
        self.chunks
            .push(Err(TransportError::Body(message.to_string())));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Submissions seen so far, in order.
    pub fn requests(&self) -> Vec<ReviewRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

#[async_trait]
impl ReviewTransport for MockTransport {
    async fn submit(&self, request: ReviewRequest) -> Result<ReviewResponse, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request);

        if let Some(err) = &self.submit_error {
            return Err(err.clone());
        }

        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;

        Ok(ReviewResponse {
            status: self.status,
            body: Box::pin(stream::iter(self.chunks.clone())),
        })
    }
}
