//! # dsgrade
//!
//! Oracles and graders for introductory data-structure assignments.
//!
//! The [`oracle`] module derives the expected behaviour of a binary search
//! tree directly from its insertion sequence, without building a tree, and
//! answers traversal and cheapest-path queries over weighted directed graphs.
//! The [`grade`] module runs candidate implementations of the traits in
//! [`candidate`] against those oracles over inputs from [`cases`], turning
//! every mismatch into a deduction with a reason.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Seeded generation of sequences and graphs
pub mod cases;
/// Traits a submission implements to be graded
pub mod candidate;
/// Process-wide settings read from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Errors raised by the oracles and the graph model
pub mod error;
/// For all things related to grading
pub mod grade;
/// Weighted directed graph stored as an adjacency map
pub mod graph;
/// Expected results computed from inputs alone
pub mod oracle;
/// Independent implementations used to check the graders
pub mod reference;
/// Values that may be stored in the graded structures
pub mod value;

pub use error::{OracleError, Result};
