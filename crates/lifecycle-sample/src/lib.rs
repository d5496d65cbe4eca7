//! # Lifecycle Sample
//!
//! A small service stack demonstrating dependency-ordered startup and
//! shutdown with `lifecycle-framework`:
//!
//! - **[components]**: the managed pieces — database pool, cache, metrics
//!   flusher, HTTP listener — plus the capability-free `AppState` hop.
//! - **[config]**: TOML settings with defaults.
//! - **[system]**: registers everything into a `ComponentGraph`; the graph,
//!   not the code order, decides what starts first.
//!
//! The binary in `main.rs` boots the system, serves until ctrl-c, then stops
//! everything in reverse dependency order.

pub mod components;
pub mod config;
pub mod system;

pub use config::Settings;
pub use system::System;
