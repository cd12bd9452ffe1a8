//! Error types for type descriptor parsing.

/// Rejection raised by a [`TypeBuilder`](crate::TypeBuilder) while
/// constructing a composite type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TypeBuildError(pub String);

impl From<String> for TypeBuildError {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TypeBuildError {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Error returned by [`TypeParser::parse`](crate::TypeParser::parse).
///
/// The first failure found during descent is returned as-is; offsets are not
/// rebased onto the outermost descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The descriptor, or a nested sub-descriptor, is blank.
    #[error("empty type string")]
    EmptyType,

    /// No scalar keyword, `ARRAY<...>` or `STRUCT<...>` shape matched.
    /// Holds the untrimmed text of the failing (sub-)descriptor.
    #[error("unknown type: {descriptor}")]
    UnknownType { descriptor: String },

    /// A comma-delimited clause of a `STRUCT<...>` is blank.
    #[error("empty field in STRUCT")]
    EmptyStructField,

    /// A struct clause has no top-level space between name and type.
    #[error("invalid STRUCT field (expected 'name type'): {field}")]
    InvalidStructField { field: String },

    /// Composite nesting exceeded the configured maximum.
    #[error("type nesting exceeds maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },

    /// The type builder refused to construct a composite type.
    #[error(transparent)]
    Build(#[from] TypeBuildError),
}

/// Field-less discriminant of [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    EmptyType,
    UnknownType,
    EmptyStructField,
    InvalidStructField,
    NestingTooDeep,
    Build,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::EmptyType => ParseErrorKind::EmptyType,
            ParseError::UnknownType { .. } => ParseErrorKind::UnknownType,
            ParseError::EmptyStructField => ParseErrorKind::EmptyStructField,
            ParseError::InvalidStructField { .. } => ParseErrorKind::InvalidStructField,
            ParseError::NestingTooDeep { .. } => ParseErrorKind::NestingTooDeep,
            ParseError::Build(_) => ParseErrorKind::Build,
        }
    }

    /// The offending input text, for variants that carry one.
    pub fn fragment(&self) -> Option<&str> {
        match self {
            ParseError::UnknownType { descriptor } => Some(descriptor),
            ParseError::InvalidStructField { field } => Some(field),
            _ => None,
        }
    }
}
