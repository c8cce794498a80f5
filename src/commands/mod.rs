//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `build.rs`: profile selection, variable layering, release builds.
//! - `tools.rs`: `--analyze` and `--assets`.
//!
//! ## Principles
//! - Each handler returns `Ok(true)` when it consumed the invocation.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod build;
pub mod tools;

pub use build::{handle_build, resolve_vars};
pub use tools::{handle_analyze, handle_assets};
