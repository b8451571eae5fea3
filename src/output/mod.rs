//! Output formatting

pub mod formatter;
