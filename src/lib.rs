//! VMC Renamer: GameCube memory card layout conversion library
//!
//! Recognizes the MCGCP (`MemoryCards/{GAMEID}0100`) and GCMCE
//! (`MemoryCards/GC/DL-DOL-{GAMEID}-{REGION3}`) layouts, plans the renames
//! between them, and applies the plan with optional backup and dry-run.

pub mod cli;
pub mod convert;
pub mod error;
pub mod layout;
pub mod report;
pub mod utils;

pub use error::{RenamerError, Result};
