//! Terminal previews.

pub mod ascii;

pub use ascii::*;
