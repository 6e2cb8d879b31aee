//! Ingestion controller
//!
//! `ReviewSession` owns the state for one review surface: it issues the
//! single network call per run, feeds the frame decoder, applies the shared
//! acceptance predicate, and pushes every accepted finding to the attached
//! sinks immediately. Per-record failures are dropped quietly; only
//! run-terminal failures reach `state.error`.

use crate::core::{Finding, ReviewState, ReviewSummary};
use crate::decode::{decode_line, decode_value, FrameDecoder, ReviewRecord};
use crate::sink::AnnotationSink;
use crate::transport::{BodyStream, ReviewRequest, ReviewTransport, TransportError};
use bytes::BytesMut;
use futures::StreamExt;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("review request failed with status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response body: {0}")]
    Envelope(String),

    #[error("a review run is already in progress")]
    RunInProgress,
}

pub struct ReviewSession {
    transport: Arc<dyn ReviewTransport>,
    state: ReviewState,
    next_id: u64,
    sinks: Vec<Box<dyn AnnotationSink>>,
}

impl ReviewSession {
    pub fn new(transport: Arc<dyn ReviewTransport>) -> Self {
        Self {
            transport,
            state: ReviewState::new(),
            next_id: 0,
            sinks: Vec::new(),
        }
    }

    pub fn attach_sink(&mut self, sink: Box<dyn AnnotationSink>) {
        self.sinks.push(sink);
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn findings(&self) -> &[Finding] {
        &self.state.findings
    }

    pub fn summary(&self) -> ReviewSummary {
        self.state.summary
    }

    /// Run one review end to end.
    ///
    /// The caller is responsible for handing in non-empty code and a usable
    /// credential; no validation happens here. Run-terminal failures land in
    /// `state().error` rather than the return value, so the observable
    /// outcome of a run is always the state snapshot. The only `Err` is the
    /// overlap guard: the exclusive borrow already rules out interleaved
    /// writers, and the guard additionally rejects a new run after a previous
    /// run future was dropped mid-flight.
    pub async fn run_review(
        &mut self,
        code: &str,
        credential: &str,
        streaming: bool,
    ) -> Result<(), ReviewError> {
        if self.state.is_loading {
            return Err(ReviewError::RunInProgress);
        }

        self.state.begin_run();
        self.notify_sinks();

        info!(streaming, "starting review run");
        let outcome = self.drive(code, credential, streaming).await;

        match outcome {
            Ok(()) => info!(accepted = self.state.findings.len(), "review run finished"),
            Err(err) => {
                warn!(accepted = self.state.findings.len(), "review run failed: {err}");
                self.state.error = Some(err.to_string());
            }
        }
        self.state.finish_run();

        Ok(())
    }

    /// Clear findings and summary. An error or in-flight loading flag from
    /// the current run is deliberately left visible.
    pub fn reset(&mut self) {
        self.state.clear();
        self.notify_sinks();
    }

    async fn drive(
        &mut self,
        code: &str,
        credential: &str,
        streaming: bool,
    ) -> Result<(), ReviewError> {
        let request = ReviewRequest {
            code: code.to_string(),
            credential: credential.to_string(),
            streaming,
        };

        let response = self.transport.submit(request).await?;
        if !response.is_success() {
            return Err(ReviewError::Status(response.status));
        }

        if streaming {
            self.ingest_stream(response.body).await
        } else {
            self.ingest_batch(response.body).await
        }
    }

    /// Streaming mode: candidates are accepted one by one as their bytes
    /// arrive, which is what gives the overlay its incremental reveal.
    async fn ingest_stream(&mut self, mut body: BodyStream) -> Result<(), ReviewError> {
        let mut frames = FrameDecoder::new();

        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            for candidate in frames.push(&chunk) {
                self.accept_candidate(&candidate);
            }
        }

        if let Some(residual) = frames.finish() {
            self.accept_candidate(&residual);
        }

        Ok(())
    }

    /// Batch mode: the whole body is one JSON value. A body that fails to
    /// parse at all is an envelope failure; a parsed body that is not an
    /// array yields zero findings without raising an error.
    async fn ingest_batch(&mut self, mut body: BodyStream) -> Result<(), ReviewError> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = body.next().await {
            buf.extend_from_slice(&chunk?);
        }

        let value: Value =
            serde_json::from_slice(&buf).map_err(|e| ReviewError::Envelope(e.to_string()))?;

        match value {
            Value::Array(items) => {
                for item in items {
                    match decode_value(item) {
                        Some(record) => self.accept(record),
                        None => debug!("dropping malformed batch record"),
                    }
                }
            }
            _ => debug!("batch response is not an array; accepting nothing"),
        }

        Ok(())
    }

    fn accept_candidate(&mut self, candidate: &str) {
        match decode_line(candidate) {
            Some(record) => self.accept(record),
            None => {
                if !candidate.trim().is_empty() {
                    debug!("dropping malformed candidate record: {candidate}");
                }
            }
        }
    }

    fn accept(&mut self, record: ReviewRecord) {
        self.next_id += 1;
        let finding = Finding {
            id: self.next_id,
            line: record.line,
            message: record.message,
            severity: record.severity,
        };
        debug!(id = finding.id, line = finding.line, severity = %finding.severity, "accepted finding");

        self.state.findings.push(finding);
        self.state.summary = ReviewSummary::of(&self.state.findings);
        self.notify_sinks();
    }

    fn notify_sinks(&mut self) {
        for sink in &mut self.sinks {
            sink.render(&self.state.findings, &self.state.summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use crate::transport::MockTransport;

    #[tokio::test]
    async fn test_ids_are_fresh_across_runs() {
        let body = "{\"line\":1,\"comment\":\"a\",\"severity\":\"info\"}\n";
        let transport = Arc::new(MockTransport::with_body(body));
        let mut session = ReviewSession::new(transport);

        session.run_review("code", "key", true).await.unwrap();
        let first_id = session.findings()[0].id;

        session.run_review("code", "key", true).await.unwrap();
        let second_id = session.findings()[0].id;

        assert_eq!(session.findings().len(), 1);
        assert!(second_id > first_id);
    }

    #[tokio::test]
    async fn test_acceptance_order_is_arrival_order() {
        let body = "{\"line\":9,\"comment\":\"later line first\",\"severity\":\"info\"}\n\
                    {\"line\":2,\"comment\":\"earlier line second\",\"severity\":\"critical\"}\n";
        let transport = Arc::new(MockTransport::with_body(body));
        let mut session = ReviewSession::new(transport);

        session.run_review("code", "key", true).await.unwrap();

        let lines: Vec<u32> = session.findings().iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![9, 2]);
        assert_eq!(session.findings()[1].severity, Severity::Critical);
    }
}
