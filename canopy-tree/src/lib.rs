//! Constant-tree data model and builder for the Canopy generator.
//!
//! This crate turns flat, underscore-delimited constant declarations into a
//! forest of named trees, one root per `(package, name)` pair. The forest is
//! the single source of truth the emitter crates serialize from.
//!
//! # Architecture
//!
//! ```text
//! ConstantDecl batches → TreeSession (accumulate) → Forest → emitters
//! ```
//!
//! A [`TreeSession`] accumulates any number of batches, then hands the
//! finished [`Forest`] over exactly once; late batches are rejected with a
//! warning diagnostic instead of being silently dropped.

mod decl;
mod diagnostic;
mod error;
mod node;
mod path;
mod session;
mod value;

pub use decl::ConstantDecl;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use node::{Forest, LeafField, Node};
pub use path::{default_root_name, split_segments};
pub use session::{BatchOutcome, TreeSession};
pub use value::{ConstantRef, ConstantValue};
