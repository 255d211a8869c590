//! Stateless helpers mapping page input to display values.

pub mod format;
pub mod parallax;
