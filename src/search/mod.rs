//! Search state machine and route synchronization

pub mod controller;
pub mod route;

pub use controller::{Phase, RequestKey, SearchController, SearchState};
pub use route::SearchRoute;
