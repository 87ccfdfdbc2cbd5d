//! Data models used throughout the application
//!
//! This module contains the explorer transaction records and the report
//! artifacts written by the tools.

// Transaction explorer API records
pub mod transaction;

// Gas summaries and comparison results
pub mod report;
