pub mod cloner;
pub mod config;
pub mod error_handling;
pub mod git;
pub mod github;
pub mod logging;
pub mod models;
pub mod ui;

pub use models::*;
