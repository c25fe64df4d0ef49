//! Convert module - plans, applies, and backs up layout conversions

pub mod backup;
pub mod execute;
pub mod plan;

pub use backup::*;
pub use execute::*;
pub use plan::*;
