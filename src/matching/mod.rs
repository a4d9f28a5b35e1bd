//! Cross-platform event matching

pub mod key;
pub mod matcher;

pub use key::*;
pub use matcher::*;
