//! Intermediate representation for rendered code.

/// A piece of code produced by a [`Renderable`] node.
#[derive(Debug, Clone)]
pub enum CodeFragment {
    /// A single line at the current indentation.
    Line(String),
    /// A blank line.
    Blank,
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `///` documentation comment; may span multiple lines.
    RustDoc(String),
    /// A `/** ... */` documentation comment; may span multiple lines.
    JsDoc(String),
}

/// Trait for nodes that can be rendered into code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
