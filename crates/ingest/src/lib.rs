//! Review Ingest - Streaming ingestion pipeline for AI code review findings
//!
//! This crate drives a single review request against a remote review service,
//! incrementally decodes the newline-delimited response into validated
//! findings, keeps a running severity summary, and feeds annotation sinks as
//! each finding is accepted. Malformed records are dropped; only run-level
//! failures surface to the caller.

pub mod config;
pub mod core;
pub mod decode;
pub mod session;
pub mod sink;
pub mod transport;

pub use crate::core::{Finding, ReviewState, ReviewSummary, Severity};

pub use config::ReviewConfig;
pub use decode::{FrameDecoder, ReviewRecord};
pub use session::{ReviewError, ReviewSession};
pub use sink::{AnnotationSink, LineMarker, TracingSink};
pub use transport::{
    HttpTransport, MockTransport, ReviewRequest, ReviewResponse, ReviewTransport, TransportError,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
