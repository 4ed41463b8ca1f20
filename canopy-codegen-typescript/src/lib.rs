//! TypeScript emitter for the Canopy constant-tree generator.
//!
//! Each root node becomes one `.ts` file under its package path: a single
//! `export const <Root> = { ... } as const` object literal mirroring the
//! tree. Object literals carry no constructor, so no instantiation guard is
//! needed.

mod generator;
mod type_mapper;

pub use canopy_codegen::{EmitResult, PreviewFile, TreeEmitter};
pub use generator::{GENERATED_HEADER, Generator};
pub use type_mapper::TypeScriptTypeMapper;
