//! Path splitting and default root naming.

/// Split an underscore-delimited identifier into path segments.
///
/// Every single underscore opens a new level; a doubled underscore collapses
/// into one literal underscore inside a segment, so identifiers can carry
/// underscores without being treated as hierarchy separators:
///
/// ```
/// use canopy_tree::split_segments;
///
/// assert_eq!(split_segments("java_io_tmpdir"), ["java", "io", "tmpdir"]);
/// assert_eq!(split_segments("java_class__path"), ["java", "class_path"]);
/// ```
///
/// The transformation is reversible for any identifier without three or more
/// consecutive underscores; beyond that the leftmost-first collapse wins.
pub fn split_segments(raw: &str) -> Vec<String> {
    let mut segments: Vec<String> = raw
        .replace('_', ".")
        .replace("..", "_")
        .split('.')
        .map(str::to_owned)
        .collect();
    // A trailing separator does not open an empty level
    while segments.len() > 1 && segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

/// Derive the default root tree name from the enclosing type's name.
///
/// A type named `FooConstants` yields `FooConstant`; anything else gets the
/// `Constant` suffix appended.
pub fn default_root_name(enclosing_type: &str) -> String {
    match enclosing_type.strip_suffix("Constants") {
        Some(stem) => format!("{stem}Constant"),
        None => format!("{enclosing_type}Constant"),
    }
}
