//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! savings test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `sources`: In-memory transaction sources and a fixed clock
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod sources;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use sources::*;
pub use assertions::*;
pub use generators::*;
