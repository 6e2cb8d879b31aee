use crate::core::{Finding, ReviewSummary};

/// State cell for one review session.
///
/// Exclusively owned and mutated by the session; sinks and other readers only
/// see `&ReviewState` snapshots. `is_loading` is true strictly between the
/// start of a run and its terminal outcome.
#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    pub findings: Vec<Finding>,
    pub summary: ReviewSummary,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh run: previous findings and error are cleared wholesale,
    /// not mutated element-wise.
    pub(crate) fn begin_run(&mut self) {
        self.findings = Vec::new();
        self.summary = ReviewSummary::of(&self.findings);
        self.error = None;
        self.is_loading = true;
    }

    pub(crate) fn finish_run(&mut self) {
        self.is_loading = false;
    }

    /// User-triggered reset: drops findings and summary but deliberately
    /// leaves `error` and `is_loading` alone.
    pub(crate) fn clear(&mut self) {
        self.findings = Vec::new();
        self.summary = ReviewSummary::of(&self.findings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    fn sample_finding() -> Finding {
        Finding {
            id: 1,
            line: 3,
            message: "shadowed binding".to_string(),
            severity: Severity::Warning,
        }
    }

    #[test]
    fn test_begin_run_clears_previous_outcome() {
        let mut state = ReviewState::new();
        state.findings.push(sample_finding());
        state.summary = ReviewSummary::of(&state.findings);
        state.error = Some("boom".to_string());

        state.begin_run();

        assert!(state.findings.is_empty());
        assert!(state.summary.is_clean());
        assert!(state.error.is_none());
        assert!(state.is_loading);
    }

    #[test]
    fn test_clear_preserves_error_and_loading() {
        let mut state = ReviewState::new();
        state.findings.push(sample_finding());
        state.summary = ReviewSummary::of(&state.findings);
        state.error = Some("request failed".to_string());
        state.is_loading = true;

        state.clear();

        assert!(state.findings.is_empty());
        assert!(state.summary.is_clean());
        assert_eq!(state.error.as_deref(), Some("request failed"));
        assert!(state.is_loading);
    }
}
