//! End-to-end tests for the Glossia pipeline.
//!
//! - The documented parsing scenarios, across scripts and word orders
//! - The round-trip law: render then re-parse reproduces the bindings
//! - Error taxonomy at the API surface

mod roundtrip_tests;
mod scenario_tests;
