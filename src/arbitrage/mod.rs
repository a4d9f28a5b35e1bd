//! Fee-aware profit computation and opportunity ranking

pub mod calculator;
pub mod ranker;

pub use calculator::*;
pub use ranker::*;
