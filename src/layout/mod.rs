//! Layout module - naming schemes, region codes, and directory scanning

pub mod naming;
pub mod region;
pub mod scan;

pub use naming::*;
pub use region::*;
pub use scan::*;
