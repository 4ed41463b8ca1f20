//! Rust emitter for the Canopy constant-tree generator.
//!
//! Each root node becomes one `.rs` file under its package path: nested
//! `pub mod` groupings holding `pub const` leaves. Modules have no runtime
//! instances, so no instantiation guard is needed.

mod generator;
mod type_mapper;

pub use canopy_codegen::{EmitResult, PreviewFile, TreeEmitter};
pub use generator::{GENERATED_HEADER, Generator};
pub use type_mapper::RustTypeMapper;
