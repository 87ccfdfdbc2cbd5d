// Export modules for the binary and the integration tests
pub mod analysis;
pub mod cli;
pub mod compare;
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod source;
pub mod store;
