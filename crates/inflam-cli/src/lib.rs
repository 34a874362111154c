//! CLI library components for inflammation analysis.

pub mod logging;
pub mod output;
