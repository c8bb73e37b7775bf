//! Layout conformance between the native probe and the Rust mirrors.
//!
//! For each descriptor a check:
//!
//! 1. asks the probe for the native size,
//! 2. allocates a [`ProbeBuffer`] large and aligned enough for both views,
//! 3. lets the probe stamp its sentinels into the buffer,
//! 4. reads every member back at the offset and width the mirror declares,
//! 5. compares against the documented sentinel.
//!
//! The outcome is a [`ConformanceReport`] naming the struct, each
//! disagreeing member, the expected sentinel and what was found instead.
//!
//! # Usage
//!
//! ```ignore
//! use ma_layout_conformance::{assert_conforms, layouts::SrcLayout};
//!
//! #[test]
//! fn src_conforms() {
//!     assert_conforms::<SrcLayout>();
//! }
//! ```

pub mod buffer;
pub mod check;
pub mod config;
pub mod error;
pub mod generators;
pub mod layouts;
pub mod report;
pub mod runner;

pub use buffer::ProbeBuffer;
pub use check::{FieldCheck, MirrorLayout, Sentinel, assert_conforms, check, stamp_bytes};
pub use config::RunConfig;
pub use error::ConformanceError;
pub use report::{ConformanceReport, FieldMismatch};
pub use runner::{Entry, Outcome, RunSummary, Runner, RunnerBuilder, registry};

pub use proptest;
pub use test_strategy;
