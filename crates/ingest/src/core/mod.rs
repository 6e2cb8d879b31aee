//! Data model shared by the whole pipeline
//!
//! A `Finding` is one accepted review issue tied to a source line. The
//! `ReviewSummary` is always recomputed from the full finding collection, and
//! `ReviewState` is the single state cell owned by the session; everything
//! else reads snapshots of it.

pub mod finding;
pub mod state;
pub mod summary;

pub use finding::{Finding, Severity};
pub use state::ReviewState;
pub use summary::ReviewSummary;
