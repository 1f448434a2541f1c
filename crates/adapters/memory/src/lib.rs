//! adapter-memory - In-memory remote retention policy API
//!
//! A faithful echo of the remote system: whatever was last set for a scope is
//! what a read returns. Used for contract tests and local dry runs.

pub mod store;

pub use store::{CallCounts, InMemoryRetentionApi};
