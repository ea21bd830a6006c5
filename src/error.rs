use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;


/// Everything that can go wrong while compiling or rendering a template.
///
/// Compile-time variants carry the line of the offending tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("line {line}: unclosed tag, expected '{end_tag}'")]
    UnterminatedBlock { end_tag: String, line: usize },

    #[error("line {line}: invalid block tag '{name}', did you forget to load its library?")]
    UnknownTag { name: String, line: usize },

    #[error("line {line}: empty block tag")]
    EmptyTag { line: usize },

    #[error("line {line}: empty variable tag")]
    EmptyVariable { line: usize },

    #[error("line {line}: '{tag}' tag requires at least one argument")]
    MissingArguments { tag: String, line: usize },

    #[error("line {line}: '{tag}' tag {message}")]
    InvalidArguments { tag: String, message: String, line: usize },

    #[error("line {line}: '{name}' is not a registered tag library")]
    UnknownLibrary { name: String, line: usize },

    #[error("reverse for '{name}' not found")]
    NoReverseMatch { name: String },

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("invalid context data: {0}")]
    Data(String),
}
