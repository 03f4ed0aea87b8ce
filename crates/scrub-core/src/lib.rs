//! Core redaction logic for scrub
//!
//! This crate contains:
//! - Keyword list loading (one literal keyword per line)
//! - Redaction engine (keyword pass plus the built-in structural patterns)

pub mod keywords;
pub mod redactor;

pub use keywords::load_keywords;
pub use redactor::{REPLACEMENT, RedactionInfo, Redactor};
