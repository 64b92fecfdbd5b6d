//! Value normalization.

pub mod numeric;

pub use numeric::{parse_f64, parse_year, strip_annotation};
