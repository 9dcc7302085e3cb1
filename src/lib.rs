//! `podium` library crate.
//!
//! The binary (`podium`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future web service, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod plot;
pub mod report;
pub mod transform;
