use miette::Diagnostic;
use thiserror::Error;

/// Result type for tree-building operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("constant '{name}' in '{enclosing_type}' must not be reassignable")]
    #[diagnostic(
        code(canopy::reassignable_source),
        help("declare '{name}' as a non-reassignable constant or remove the marker")
    )]
    ReassignableSource {
        name: String,
        enclosing_type: String,
    },

    #[error("'{segment}' is used as both a group and a constant under '{root}'")]
    #[diagnostic(
        code(canopy::group_field_conflict),
        help("rename one of the colliding declarations; a doubled underscore keeps a literal underscore inside one segment")
    )]
    GroupFieldConflict { segment: String, root: String },

    #[error("constant '{segment}' is declared twice under '{root}'")]
    #[diagnostic(code(canopy::duplicate_constant))]
    DuplicateConstant { segment: String, root: String },

    #[error("constant declaration has an empty name")]
    #[diagnostic(code(canopy::empty_name))]
    EmptyConstantName,

    #[error("session already finished; the forest was handed to the emitter")]
    #[diagnostic(
        code(canopy::session_finished),
        help("create a new session to accumulate more constants")
    )]
    SessionFinished,
}
