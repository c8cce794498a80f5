//! Service layer containing the build logic and its side-effect helpers.
//!
//! ## Service map
//! - `template.rs`: `{{NAME}}` rendering, slot filling, default variables.
//! - `config.rs`: `boilerkit.toml` loading and the minimum-version check.
//! - `emit.rs`: release directory writer that records emitted/skipped files.
//! - `profiles.rs`: one assembly function per release profile.
//! - `assets.rs`: placeholder images, manifest copy, source SVG generation.
//! - `readme.rs`: per-profile README text.
//! - `installer.rs`: installer script for the individual release.
//! - `analyzer.rs`: existing-project inspection and recommendation.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Missing inputs are warnings, never errors.
//! - Keep command handlers thin; delegate to services.

pub mod analyzer;
pub mod assets;
pub mod config;
pub mod emit;
pub mod installer;
pub mod output;
pub mod profiles;
pub mod readme;
pub mod template;
