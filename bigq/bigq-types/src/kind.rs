use std::fmt;

/// Primitive (non-composite) BigQuery type kinds.
///
/// Several keywords map to one kind: `FLOAT` is [`TypeKind::Float32`],
/// `DOUBLE` is [`TypeKind::Float64`] and `BOOLEAN` is [`TypeKind::Bool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Numeric,
    BigNumeric,
    Bool,
    String,
    Bytes,
    Date,
    Datetime,
    Time,
    Timestamp,
    Geography,
    Json,
    Interval,
}

/// Keyword table used for scalar matching, synonyms included.
const KEYWORDS: &[(&str, TypeKind)] = &[
    ("INT64", TypeKind::Int64),
    ("INT32", TypeKind::Int32),
    ("UINT32", TypeKind::Uint32),
    ("UINT64", TypeKind::Uint64),
    ("FLOAT32", TypeKind::Float32),
    ("FLOAT64", TypeKind::Float64),
    ("FLOAT", TypeKind::Float32),
    ("DOUBLE", TypeKind::Float64),
    ("NUMERIC", TypeKind::Numeric),
    ("BIGNUMERIC", TypeKind::BigNumeric),
    ("BOOL", TypeKind::Bool),
    ("BOOLEAN", TypeKind::Bool),
    ("STRING", TypeKind::String),
    ("BYTES", TypeKind::Bytes),
    ("DATE", TypeKind::Date),
    ("DATETIME", TypeKind::Datetime),
    ("TIME", TypeKind::Time),
    ("TIMESTAMP", TypeKind::Timestamp),
    ("GEOGRAPHY", TypeKind::Geography),
    ("JSON", TypeKind::Json),
    ("INTERVAL", TypeKind::Interval),
];

impl TypeKind {
    /// Looks up a scalar keyword. Matching is ASCII case-insensitive and
    /// whole-string; surrounding whitespace is not stripped here.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(keyword))
            .map(|(_, kind)| *kind)
    }

    /// All accepted keywords paired with the kind they denote.
    pub fn keywords() -> impl Iterator<Item = (&'static str, TypeKind)> {
        KEYWORDS.iter().copied()
    }

    /// Canonical keyword, as written back by the printer.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Int32 => "INT32",
            TypeKind::Int64 => "INT64",
            TypeKind::Uint32 => "UINT32",
            TypeKind::Uint64 => "UINT64",
            TypeKind::Float32 => "FLOAT32",
            TypeKind::Float64 => "FLOAT64",
            TypeKind::Numeric => "NUMERIC",
            TypeKind::BigNumeric => "BIGNUMERIC",
            TypeKind::Bool => "BOOL",
            TypeKind::String => "STRING",
            TypeKind::Bytes => "BYTES",
            TypeKind::Date => "DATE",
            TypeKind::Datetime => "DATETIME",
            TypeKind::Time => "TIME",
            TypeKind::Timestamp => "TIMESTAMP",
            TypeKind::Geography => "GEOGRAPHY",
            TypeKind::Json => "JSON",
            TypeKind::Interval => "INTERVAL",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
