//! Minimal CSV handling for published survey feeds
//!
//! The upstream publisher emits loosely-formed CSV: quoted fields may
//! contain commas, quoting may be unbalanced, and rows may be short.
//! The tokenizer is best-effort and never fails; the mapper drops rows
//! that cannot satisfy a feed's minimum shape rather than erroring.

pub mod mapper;
pub mod tokenize;

pub use mapper::{map_rows, parse_feed, split_document, FeedSchema};
pub use tokenize::tokenize_line;
