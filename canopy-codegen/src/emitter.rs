//! Language-agnostic emission traits and the shared write loop.

use std::path::Path;

use canopy_core::{File, NamingConvention, WriteResult};
use canopy_tree::{ConstantValue, Forest};
use eyre::Result;

/// Trait for language-specific constant-tree emitters.
///
/// Implement this trait to emit constant trees in a new target language.
pub trait TreeEmitter {
    /// Language identifier (e.g., "rust", "typescript")
    fn language(&self) -> &'static str;

    /// File extension for emitted source files (e.g., "rs", "ts")
    fn file_extension(&self) -> &'static str;

    /// The naming convention trees must be built with for this target.
    fn naming(&self) -> NamingConvention;

    /// Render every root file in memory without writing to disk.
    fn preview(&self, forest: &Forest) -> Vec<PreviewFile>;

    /// Write one source file per root under `out_dir`.
    ///
    /// Implementations render via [`TreeEmitter::preview`] and write through
    /// [`write_root_files`], which skips colliding artifacts and records
    /// individual write failures instead of aborting.
    fn emit(&self, forest: &Forest, out_dir: &Path) -> Result<EmitResult>;
}

/// Trait mapping constant values to target-language syntax.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Type annotation for a constant holding this value.
    fn value_type(&self, value: &ConstantValue) -> String;

    /// Initializer expression: a literal for primitive and string values, a
    /// reference expression back to the original declaration otherwise.
    fn value_expr(&self, value: &ConstantValue) -> String;
}

/// A rendered root file.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of one emission pass.
#[derive(Debug, Default)]
pub struct EmitResult {
    /// Root files that were written
    pub written: Vec<String>,
    /// Root files skipped because an artifact already existed at their path
    pub skipped: Vec<String>,
    /// Root files whose write failed, with the failure message
    pub failed: Vec<(String, String)>,
}

impl EmitResult {
    /// Whether every root either wrote cleanly or was skipped.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Write rendered root files under `out_dir`.
///
/// A file already present at a target path is skipped (the unit was already
/// emitted); any other I/O failure is recorded per unit and the remaining
/// roots are still written.
pub fn write_root_files(files: Vec<PreviewFile>, out_dir: &Path) -> EmitResult {
    let mut result = EmitResult::default();
    for file in files {
        let target = File::if_missing(out_dir.join(&file.path), file.content);
        match target.write() {
            Ok(WriteResult::Written) => result.written.push(file.path),
            Ok(WriteResult::Skipped) => result.skipped.push(file.path),
            Err(err) => result.failed.push((file.path, err.to_string())),
        }
    }
    result
}
