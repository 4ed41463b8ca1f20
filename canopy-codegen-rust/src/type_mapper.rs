//! Rust type mapper implementation.

use canopy_codegen::TypeMapper;
use canopy_tree::ConstantValue;

/// Maps constant values to Rust type and literal syntax.
///
/// Reference values render as an absolute `::`-separated path back to the
/// original declaration instead of copying the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn value_type(&self, value: &ConstantValue) -> String {
        match value {
            ConstantValue::Bool(_) => "bool".to_string(),
            ConstantValue::Int(_) => "i64".to_string(),
            ConstantValue::Float(_) => "f64".to_string(),
            ConstantValue::Char(_) => "char".to_string(),
            ConstantValue::Str(_) => "&str".to_string(),
            ConstantValue::Reference(r) => r.ty.replace('.', "::"),
        }
    }

    fn value_expr(&self, value: &ConstantValue) -> String {
        match value {
            ConstantValue::Bool(b) => b.to_string(),
            ConstantValue::Int(i) => i.to_string(),
            ConstantValue::Float(f) => format!("{f:?}"),
            ConstantValue::Char(c) => format!("{c:?}"),
            ConstantValue::Str(s) => format!("{s:?}"),
            ConstantValue::Reference(r) => r.target.replace('.', "::"),
        }
    }
}
