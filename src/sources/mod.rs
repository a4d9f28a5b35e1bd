//! Extraction collaborator boundary
//!
//! The scanner does not render or scrape pages itself. An external
//! extraction process drops per-platform JSON into an input directory;
//! this module reads those drops, one task per platform, and tolerates
//! partial failure.

pub mod json_file;
pub mod gather;

pub use json_file::*;
pub use gather::*;
