//! # gwip Testkit
//!
//! Test utilities for gwip.
//!
//! This crate provides:
//! - Temporary source-file fixtures, plain and bgzip block-compressed
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use gwip_testkit::fixtures::SourceFile;
//!
//! let source = SourceFile::plain(&["1 A", "2 B", "3 C"]);
//! assert!(source.path().exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

pub use fixtures::SourceFile;
