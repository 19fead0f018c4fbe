//! Platform-agnostic plumbing shared by stores, data sources and views.

pub mod config;
pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
