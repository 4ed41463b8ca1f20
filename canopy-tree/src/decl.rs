//! Input descriptors for marked constant declarations.

use crate::path::default_root_name;
use crate::value::ConstantValue;

/// One marked constant declaration, as delivered by the driver.
///
/// Mirrors the marker's recognized options: the output package and the root
/// tree name can each be overridden explicitly, otherwise they derive from
/// the declaration's enclosing package and type.
///
/// # Example
///
/// ```
/// use canopy_tree::ConstantDecl;
///
/// let decl = ConstantDecl::new("java_io_tmpdir", "SystemConstants", "com.example", "java.io.tmpdir")
///     .doc("Default temporary file path.");
/// assert_eq!(decl.effective_package(), "com.example");
/// assert_eq!(decl.effective_root_name(), "SystemConstant");
/// ```
#[derive(Debug, Clone)]
pub struct ConstantDecl {
    pub(crate) name: String,
    pub(crate) enclosing_type: String,
    pub(crate) package: String,
    pub(crate) package_override: Option<String>,
    pub(crate) root_override: Option<String>,
    pub(crate) value: ConstantValue,
    pub(crate) doc: Option<String>,
    pub(crate) reassignable: bool,
}

impl ConstantDecl {
    /// Create a descriptor for a declaration named `name` inside
    /// `enclosing_type`, which lives in `package`.
    pub fn new(
        name: impl Into<String>,
        enclosing_type: impl Into<String>,
        package: impl Into<String>,
        value: impl Into<ConstantValue>,
    ) -> Self {
        Self {
            name: name.into(),
            enclosing_type: enclosing_type.into(),
            package: package.into(),
            package_override: None,
            root_override: None,
            value: value.into(),
            doc: None,
            reassignable: false,
        }
    }

    /// Override the output package.
    pub fn package_name(mut self, package: impl Into<String>) -> Self {
        self.package_override = Some(package.into());
        self
    }

    /// Override the root tree name.
    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_override = Some(name.into());
        self
    }

    /// Attach documentation copied from the source declaration.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Mark the source declaration as reassignable.
    ///
    /// The builder rejects such declarations with a hard error; the marker
    /// only applies to non-reassignable constants.
    pub fn reassignable(mut self) -> Self {
        self.reassignable = true;
        self
    }

    /// The raw underscore-delimited declaration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared value.
    pub fn value(&self) -> &ConstantValue {
        &self.value
    }

    /// The output package: the explicit override, else the enclosing package.
    pub fn effective_package(&self) -> &str {
        self.package_override.as_deref().unwrap_or(&self.package)
    }

    /// The root tree name: the explicit override, else derived from the
    /// enclosing type's name.
    pub fn effective_root_name(&self) -> String {
        match &self.root_override {
            Some(name) => name.clone(),
            None => default_root_name(&self.enclosing_type),
        }
    }

    /// The forest key this declaration resolves to.
    pub fn root_key(&self) -> String {
        format!("{}.{}", self.effective_package(), self.effective_root_name())
    }
}
