//! Routing Test Suite: num_ksid contract and routing schema
//!
//! Validates the `num_ksid` strategy as the planner sees it: through the
//! capability traits, resolved by name from a routing config.
//!
//! ## Test Organization
//!
//! - `num_ksid_contract_tests.rs` - bijection, verify, batch order, failures
//! - `coercion_tests.rs` - key normalization shared by map and verify
//! - `registry_tests.rs` - strategy registration and construction
//! - `vschema_tests.rs` - routing.toml → named vindexes → shard selection
//! - `concurrency_tests.rs` - shared instances across threads
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test routing
//! ```

mod test_utils;

mod coercion_tests;
mod concurrency_tests;
mod registry_tests;
