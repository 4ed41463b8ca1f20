//! Core utilities for the Canopy constant-tree generator.
//!
//! This crate provides the fundamental pieces shared across the Canopy
//! ecosystem: file-write rules for generated artifacts, identifier case
//! utilities, and per-language naming conventions.

mod file;
mod naming;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Naming conventions
pub use naming::{NamingConvention, RUST_NAMING, TYPESCRIPT_NAMING, is_identifier};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
