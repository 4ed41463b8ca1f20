//! Code rendering building blocks.
//!
//! This module provides the primitives emitters render with:
//! - [`CodeBuilder`] - indentation-aware line buffer
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for types that can be converted to code fragments
//! - [`Indent`] - indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
