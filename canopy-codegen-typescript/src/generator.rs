use std::path::Path;

use canopy_codegen::{
    CodeBuilder, EmitResult, PreviewFile, TreeEmitter, TypeMapper, write_root_files,
};
use canopy_core::{NamingConvention, TYPESCRIPT_NAMING};
use canopy_tree::{Forest, Node};
use eyre::Result;

use crate::TypeScriptTypeMapper;

/// Header prepended to every emitted file.
pub const GENERATED_HEADER: &str = "// Generated by Canopy - DO NOT EDIT";

/// TypeScript emitter producing one object-literal file per root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    mapper: TypeScriptTypeMapper,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeEmitter for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn naming(&self) -> NamingConvention {
        TYPESCRIPT_NAMING
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
    /// after the root in kebab-case.
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
        let mut builder = CodeBuilder::typescript();
        builder.push_line(GENERATED_HEADER);
        builder.push_blank();
        builder.push_line(&format!("export const {} = {{", root.name()));
        builder.push_indent();
        self.push_members(&mut builder, root);
        builder.push_dedent();
        builder.push_line("} as const;");
        builder.build()
    }

    /// Render a node's leaf constants followed by its child objects, in
    /// insertion order.
    fn push_members(&self, builder: &mut CodeBuilder, node: &Node) {
        for field in node.fields() {
            if let Some(doc) = field.doc() {
                builder.push_jsdoc(doc);
            }
            builder.push_line(&format!(
                "{}: {},",
                field.name(),
                self.mapper.value_expr(field.value())
            ));
        }
        for child in node.children() {
            builder.push_line(&format!("{}: {{", child.name()));
            builder.push_indent();
            self.push_members(builder, child);
            builder.push_dedent();
            builder.push_line("},");
        }
    }
}
