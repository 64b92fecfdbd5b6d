//! CLI library components for the life-expectancy pipeline.

pub mod logging;
pub mod pipeline;
