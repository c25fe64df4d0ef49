//! Report module - summarizing conversion results

pub mod summary;

pub use summary::*;
