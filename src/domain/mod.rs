//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs`: profiles, source layout, config, report/output structs, errors.
//! - `constants.rs`: stable file lists, default variables and built-in fragments.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema. Keep changes to them explicit.

pub mod constants;
pub mod models;
