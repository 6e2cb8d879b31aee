use crate::core::{Finding, Severity};
use serde::{Deserialize, Serialize};

/// Severity counts over the current finding collection.
///
/// Always derived by a full recount via [`ReviewSummary::of`]; counters are
/// never incremented independently of the collection, so the summary cannot
/// drift from the findings it describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total: usize,
    pub info: usize,
    pub warning: usize,
    pub critical: usize,
}

impl ReviewSummary {
    pub fn of(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut acc, finding| {
            acc.total += 1;
            match finding.severity {
                Severity::Info => acc.info += 1,
                Severity::Warning => acc.warning += 1,
                Severity::Critical => acc.critical += 1,
            }
            acc
        })
    }

    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(id: u64, severity: Severity) -> Finding {
        Finding {
            id,
            line: 1,
            message: "m".to_string(),
            severity,
        }
    }

    #[test]
    fn test_empty_collection_is_clean() {
        let summary = ReviewSummary::of(&[]);
        assert!(summary.is_clean());
        assert_eq!(summary, ReviewSummary::default());
    }

    #[test]
    fn test_counts_by_severity() {
        let findings = vec![
            finding(1, Severity::Info),
            finding(2, Severity::Critical),
            finding(3, Severity::Warning),
            finding(4, Severity::Critical),
        ];

        let summary = ReviewSummary::of(&findings);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.info, 1);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.critical, 2);
    }

    #[test]
    fn test_total_equals_sum_of_buckets() {
        let mut findings = Vec::new();
        for id in 0..30 {
            let severity = match id % 3 {
                0 => Severity::Info,
                1 => Severity::Warning,
                _ => Severity::Critical,
            };
            findings.push(finding(id, severity));

            let summary = ReviewSummary::of(&findings);
            assert_eq!(summary.total, summary.info + summary.warning + summary.critical);
        }
    }
}
