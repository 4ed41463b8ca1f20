//! The constant-tree data model.

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::ConstantValue;

/// One level of a constant tree.
///
/// A node is either a root (it carries the output package) or an interior
/// grouping created while walking a path. Children and fields are keyed by
/// their sanitized names and preserve insertion order, so emitted output is
/// deterministic across runs.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) package: Option<String>,
    pub(crate) children: IndexMap<String, Node>,
    pub(crate) fields: IndexMap<String, LeafField>,
}

impl Node {
    pub(crate) fn root(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: Some(package.into()),
            children: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    pub(crate) fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            children: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    /// The sanitized name of this level.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The output namespace; set only on root nodes.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Child groupings in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Leaf constants attached directly to this level, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &LeafField> {
        self.fields.values()
    }

    /// Look up a child grouping by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Look up a leaf constant by name.
    pub fn field(&self, name: &str) -> Option<&LeafField> {
        self.fields.get(name)
    }

    /// Whether the node holds no children and no fields.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.fields.is_empty()
    }
}

/// A single generated constant.
#[derive(Debug, Clone, Serialize)]
pub struct LeafField {
    pub(crate) name: String,
    pub(crate) value: ConstantValue,
    pub(crate) doc: Option<String>,
}

impl LeafField {
    /// The sanitized final path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constant's value.
    pub fn value(&self) -> &ConstantValue {
        &self.value
    }

    /// Documentation copied from the source declaration, if any.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// All accumulated constant trees, keyed by `package + "." + rootName`.
///
/// Declarations from unrelated source types that resolve to the same key
/// merge into the same root.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Forest {
    pub(crate) roots: IndexMap<String, Node>,
}

impl Forest {
    /// Root nodes in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &Node> {
        self.roots.values()
    }

    /// Look up a root by its `package.RootName` key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.roots.get(key)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
