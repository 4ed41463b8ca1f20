//! TypeScript type mapper implementation.

use canopy_codegen::TypeMapper;
use canopy_tree::ConstantValue;

/// Maps constant values to TypeScript type and literal syntax.
///
/// Reference values keep their dotted qualified path; the emitted field
/// evaluates the original declaration instead of copying its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn value_type(&self, value: &ConstantValue) -> String {
        match value {
            ConstantValue::Bool(_) => "boolean".to_string(),
            ConstantValue::Int(_) | ConstantValue::Float(_) => "number".to_string(),
            ConstantValue::Char(_) | ConstantValue::Str(_) => "string".to_string(),
            ConstantValue::Reference(r) => r.ty.clone(),
        }
    }

    fn value_expr(&self, value: &ConstantValue) -> String {
        match value {
            ConstantValue::Bool(b) => b.to_string(),
            ConstantValue::Int(i) => i.to_string(),
            ConstantValue::Float(f) => format!("{f:?}"),
            // A char constant becomes a one-character string
            ConstantValue::Char(c) => format!("{:?}", String::from(*c)),
            ConstantValue::Str(s) => format!("{s:?}"),
            ConstantValue::Reference(r) => r.target.clone(),
        }
    }
}
