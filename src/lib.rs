//! Museum Browser - browse a museum's public art collection
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod favorites;
pub mod hydration;
pub mod models;
pub mod screens;
pub mod shell;
pub mod source;
pub mod state;
pub mod traits;
