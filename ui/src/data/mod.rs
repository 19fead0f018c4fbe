//! Dashboard datasets: the shared model plus everything that produces one.

pub mod cohort;
pub mod export;
pub mod funnel;
pub mod import;
pub mod mock;
pub mod model;
pub mod users;

pub use model::*;
