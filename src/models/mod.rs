//! Display-layer models

pub mod display;

pub use display::CandidateDisplay;
