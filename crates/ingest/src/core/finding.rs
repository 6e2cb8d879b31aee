use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl Severity {
    /// Whole-line decoration class for editor overlays.
    pub fn marker_class(&self) -> &'static str {
        match self {
            Self::Info => "bg-green-50 border-l-4 border-green-500",
            Self::Warning => "bg-yellow-50 border-l-4 border-yellow-500",
            Self::Critical => "bg-red-50 border-l-4 border-red-500",
        }
    }

    /// Badge class used when listing findings in a summary panel.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Info => "bg-green-100 border-green-300 text-green-800",
            Self::Warning => "bg-yellow-100 border-yellow-300 text-yellow-800",
            Self::Critical => "bg-red-100 border-red-300 text-red-800",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Info => "💡",
            Self::Warning => "⚠️",
            Self::Critical => "🚨",
        }
    }
}

/// One accepted, validated review issue.
///
/// The id is assigned by the session when the record is accepted; the wire
/// payload never carries one. Findings are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: u64,

    /// 1-based source line the issue is attached to.
    pub line: u32,

    pub message: String,

    pub severity: Severity,
}
