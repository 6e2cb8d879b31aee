//! Annotation sink contract for editor overlays
//!
//! Sinks receive the full finding collection on every change and render
//! per-line markers. Rendering is synchronous and never awaited by the
//! session, so a slow sink cannot stall ingestion of the next record.

use crate::core::{Finding, ReviewSummary};
use tracing::debug;

pub trait AnnotationSink: Send {
    fn render(&mut self, findings: &[Finding], summary: &ReviewSummary);
}

/// One resolved line decoration, ready for an editor overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMarker {
    pub line: u32,
    pub class: &'static str,
    pub hover: String,
}

impl LineMarker {
    pub fn for_finding(finding: &Finding) -> Self {
        Self {
            line: finding.line,
            class: finding.severity.marker_class(),
            hover: format!(
                "**{}**: {}",
                finding.severity.to_string().to_uppercase(),
                finding.message
            ),
        }
    }
}

/// Default headless sink: logs each refresh through `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AnnotationSink for TracingSink {
    fn render(&mut self, findings: &[Finding], summary: &ReviewSummary) {
        debug!(
            total = summary.total,
            info = summary.info,
            warning = summary.warning,
            critical = summary.critical,
            "annotation refresh"
        );
        for finding in findings {
            let marker = LineMarker::for_finding(finding);
            debug!(line = marker.line, class = marker.class, "{}", marker.hover);
        }
    }
}
