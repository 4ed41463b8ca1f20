//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indentation-aware buffer for building generated source.
///
/// # Example
///
/// ```
/// use canopy_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_line("pub mod java {")
///     .push_indent()
///     .push_line("pub const home: &str = \"java.home\";")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "pub mod java {\n    pub const home: &str = \"java.home\";\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Rust default).
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Rust doc comment (`/// text`), one comment line per input line.
    pub fn push_rust_doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            self.write_indent();
            if line.is_empty() {
                self.buffer.push_str("///\n");
            } else {
                self.buffer.push_str("/// ");
                self.buffer.push_str(line);
                self.buffer.push('\n');
            }
        }
        self
    }

    /// Add a JSDoc comment: `/** text */` for one line, a block for more.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        match lines.as_slice() {
            [] => {}
            [only] => {
                self.write_indent();
                self.buffer.push_str("/** ");
                self.buffer.push_str(only);
                self.buffer.push_str(" */\n");
            }
            many => {
                self.push_line("/**");
                for line in many {
                    self.write_indent();
                    if line.is_empty() {
                        self.buffer.push_str(" *\n");
                    } else {
                        self.buffer.push_str(" * ");
                        self.buffer.push_str(line);
                        self.buffer.push('\n');
                    }
                }
                self.push_line(" */");
            }
        }
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::RustDoc(text) => {
                self.push_rust_doc(&text);
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::rust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::rust();
        builder.push_line("pub const a: bool = true;");
        assert_eq!(builder.build(), "pub const a: bool = true;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_line("pub mod os {")
            .push_indent()
            .push_line("pub const name: &str = \"os.name\";")
            .push_dedent()
            .push_line("}");

        assert_eq!(
            builder.build(),
            "pub mod os {\n    pub const name: &str = \"os.name\";\n}\n"
        );
    }

    #[test]
    fn test_typescript_indent() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("os: {")
            .push_indent()
            .push_line("name: \"os.name\",")
            .push_dedent()
            .push_line("},");

        assert_eq!(builder.build(), "os: {\n  name: \"os.name\",\n},\n");
    }

    #[test]
    fn test_blank_line() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_line("pub const a: i64 = 1;")
            .push_blank()
            .push_line("pub const b: i64 = 2;");
        assert_eq!(
            builder.build(),
            "pub const a: i64 = 1;\n\npub const b: i64 = 2;\n"
        );
    }

    #[test]
    fn test_rust_doc_single_line() {
        let mut builder = CodeBuilder::rust();
        builder.push_rust_doc("User home directory.");
        assert_eq!(builder.build(), "/// User home directory.\n");
    }

    #[test]
    fn test_rust_doc_multi_line() {
        let mut builder = CodeBuilder::rust();
        builder.push_rust_doc("First line.\n\nSecond paragraph.");
        assert_eq!(
            builder.build(),
            "/// First line.\n///\n/// Second paragraph.\n"
        );
    }

    #[test]
    fn test_rust_doc_is_indented() {
        let mut builder = CodeBuilder::rust();
        builder.push_indent().push_rust_doc("Indented.");
        assert_eq!(builder.build(), "    /// Indented.\n");
    }

    #[test]
    fn test_jsdoc_single_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc("User home directory.");
        assert_eq!(builder.build(), "/** User home directory. */\n");
    }

    #[test]
    fn test_jsdoc_multi_line() {
        let mut builder = CodeBuilder::typescript();
        builder.push_jsdoc("First line.\nSecond line.");
        assert_eq!(
            builder.build(),
            "/**\n * First line.\n * Second line.\n */\n"
        );
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::RustDoc("A constant.".to_string()),
                    CodeFragment::Line("pub const x: i64 = 1;".to_string()),
                ]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "/// A constant.\npub const x: i64 = 1;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "pub mod java {".to_string(),
                    body: vec![CodeFragment::Line(
                        "pub const home: &str = \"java.home\";".to_string(),
                    )],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::rust();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "pub mod java {\n    pub const home: &str = \"java.home\";\n}\n"
        );
    }
}
