//! Reporting utilities: formatted terminal output per chart kind.

pub mod format;

pub use format::*;
