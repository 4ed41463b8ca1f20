//! Shared emission utilities for the Canopy constant-tree generator.
//!
//! This crate provides the language-agnostic half of source emission, used
//! by language-specific emitter crates (e.g. `canopy-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code rendering building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`emitter`] - The TreeEmitter and TypeMapper traits plus the shared write loop
//! - [`processor`] - Batch-driven orchestration of a session and an emitter
//! - [`testing`] - Test fixtures (feature-gated)

pub mod builder;
pub mod emitter;
pub mod processor;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use emitter::{EmitResult, PreviewFile, TreeEmitter, TypeMapper, write_root_files};
pub use processor::{EmitPolicy, Processor};
