use std::path::Path;

use canopy_codegen::{
    CodeBuilder, EmitResult, PreviewFile, TreeEmitter, TypeMapper, write_root_files,
};
use canopy_core::{NamingConvention, RUST_NAMING};
use canopy_tree::{Forest, Node};
use eyre::Result;

use crate::RustTypeMapper;

/// Header prepended to every emitted file.
pub const GENERATED_HEADER: &str = "// Generated by Canopy - DO NOT EDIT";

/// Rust emitter producing one module file per constant-tree root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    mapper: RustTypeMapper,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeEmitter for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn naming(&self) -> NamingConvention {
        RUST_NAMING
    }

    fn preview(&self, forest: &Forest) -> Vec<PreviewFile> {
        forest
            .roots()
            .map(|root| PreviewFile {
                path: self.root_path(root),
                content: self.render_root(root),
            })
            .collect()
    }

    fn emit(&self, forest: &Forest, out_dir: &Path) -> Result<EmitResult> {
        Ok(write_root_files(self.preview(forest), out_dir))
    }
}

impl Generator {
    /// Output path for a root: package segments as directories, file named
    /// after the root in snake_case.
    fn root_path(&self, root: &Node) -> String {
        let file = format!(
            "{}.{}",
            self.naming().file_name(root.name()),
            self.file_extension()
        );
        match root.package() {
            Some(package) if !package.is_empty() => {
                format!("{}/{}", package.replace('.', "/"), file)
            }
            _ => file,
        }
    }

    fn render_root(&self, root: &Node) -> String {
        let mut builder = CodeBuilder::rust();
        builder.push_line(GENERATED_HEADER);
        builder.push_blank();
        // Leaf names are path segments, not screaming-case constants
        builder.push_line("#![allow(non_upper_case_globals)]");
        if !root.is_empty() {
            builder.push_blank();
            self.push_members(&mut builder, root);
        }
        builder.build()
    }

    /// Render a node's leaf constants followed by its child modules, in
    /// insertion order.
    fn push_members(&self, builder: &mut CodeBuilder, node: &Node) {
        let mut wrote_any = false;
        for field in node.fields() {
            if let Some(doc) = field.doc() {
                builder.push_rust_doc(doc);
            }
            builder.push_line(&format!(
                "pub const {}: {} = {};",
                field.name(),
                self.mapper.value_type(field.value()),
                self.mapper.value_expr(field.value())
            ));
            wrote_any = true;
        }
        for child in node.children() {
            if wrote_any {
                builder.push_blank();
            }
            builder.push_line(&format!("pub mod {} {{", child.name()));
            builder.push_indent();
            self.push_members(builder, child);
            builder.push_dedent();
            builder.push_line("}");
            wrote_any = true;
        }
    }
}
