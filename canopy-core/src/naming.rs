//! Naming conventions for target output languages.

use crate::{to_kebab_case, to_snake_case};

/// Language-specific naming rules for emitted constant trees.
///
/// Defines how root tree names map to file names, which words are reserved
/// in the target language, and how a colliding segment is escaped. The tree
/// builder sanitizes every path segment through the convention of the
/// language it is building for, so sibling lookups always compare final
/// names.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a root tree name to a file name (e.g., "SystemConstant" -> "system_constant")
    pub root_to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "mod" -> "r#mod" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a root tree name into an output file name (without extension).
    pub fn file_name(&self, root: &str) -> String {
        (self.root_to_file)(root)
    }

    /// Sanitize one path segment into a usable identifier.
    ///
    /// Segments that are not identifiers at all (empty, or starting with a
    /// digit) get a leading underscore; reserved words go through the
    /// language escape.
    pub fn sanitize_segment(&self, segment: &str) -> String {
        if !is_identifier(segment) {
            return format!("_{segment}");
        }
        self.safe_name(segment)
    }
}

/// Check whether a string is a plain ASCII identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

fn escape_rust_reserved(name: &str) -> String {
    // `crate`, `self`, `super` and `Self` cannot be raw identifiers
    match name {
        "crate" | "self" | "super" | "Self" => format!("{name}_"),
        _ => format!("r#{name}"),
    }
}

fn escape_with_underscore(name: &str) -> String {
    format!("{name}_")
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    root_to_file: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// TypeScript naming conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    root_to_file: to_kebab_case,
    reserved_words: &[
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
    ],
    escape_reserved: escape_with_underscore,
};
