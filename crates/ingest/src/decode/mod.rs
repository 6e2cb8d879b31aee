//! Tolerant decoding of the review response body
//!
//! The frame decoder turns arbitrarily chunked bytes into candidate record
//! strings; the record module holds the single acceptance predicate shared by
//! the streaming and batch paths.

pub mod frame;
pub mod record;

pub use frame::FrameDecoder;
pub use record::{decode_line, decode_value, ReviewRecord};
