//! Chart documents for the external renderer.
//!
//! The renderer (a Highcharts-style browser library) consumes a configuration
//! object per chart; this module builds those objects around the shaped
//! series, wraps them in a portable `ChartDocument`, and can emit a
//! self-contained HTML page that hands the document to the renderer.
//!
//! - renderer options per chart kind (`options`)
//! - portable document + JSON writer (`document`)
//! - HTML page assembly (`html`)

pub mod document;
pub mod html;
pub mod options;

pub use document::*;
pub use html::*;
pub use options::*;
