pub mod analysis;
pub mod assembly;
pub mod body;
pub mod cutlist;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use cutlist::{Cutlist, CutlistConfig, CutlistEntry, ExtractCutlist, Part};
pub use error::{CutlistError, Result};
