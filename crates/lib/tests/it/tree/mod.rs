//! Tree engine integration tests
//!
//! Tests are organized by transform: building and materializing, path
//! resolution, mutation, sizing, and the `Tree` API that ties them together.

mod resolve_tests;
mod size_tests;
