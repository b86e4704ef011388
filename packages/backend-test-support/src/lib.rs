//! Shared helpers for the tic-tac-toe backend test suites.
//!
//! Kept in its own crate so integration test binaries can install logging
//! and assert on error bodies without reaching into backend internals.

pub mod logging;
pub mod problem_details;
