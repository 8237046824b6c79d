//! Shared test fixtures for Point'd crates.
//!
//! This crate provides plain data for testing. It has no dependencies on
//! the other workspace crates so any of them can pull it in as a
//! dev-dependency without a cycle.
//!
//! - [`expressions`] - arithmetic inputs with their expected values or failures
//! - [`games`] - recorded game results with the margin and score they produce
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! pointd-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use pointd_test::expressions::VALID_EXPRESSIONS;
//! use pointd_test::games::{crushing_victory, GameFixture};
//! ```

pub mod expressions;
pub mod games;

pub use expressions::{ExpressionCase, MalformedCase, MalformedKind};
pub use games::GameFixture;
