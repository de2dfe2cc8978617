//! Core types and utilities

pub mod config;
pub mod units;

pub use config::AeroponicConfig;
pub use units::*;
