pub mod config;
pub mod error;
pub mod frequencies;
pub mod grid;
pub mod metrics;
pub mod prediction;
pub mod scanning;
pub mod simulate;
// cmd and reports stay binary modules (declared in main.rs); everything the
// integration tests need lives in the library crate.
