use std::fmt::{self, Display, Formatter};

use crate::kind::TypeKind;

/// Fully resolved type tree produced by [`ParsedTypeBuilder`](crate::ParsedTypeBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedType {
    Scalar(TypeKind),
    Array(Box<ParsedType>),
    /// Fields in declaration order. Names are not required to be unique.
    Struct(Vec<StructField>),
}

impl ParsedType {
    pub fn array(element: ParsedType) -> Self {
        ParsedType::Array(Box::new(element))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ParsedType::Scalar(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ParsedType::Array(_))
    }

    pub fn scalar_kind(&self) -> Option<TypeKind> {
        match self {
            ParsedType::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<&ParsedType> {
        match self {
            ParsedType::Array(elem) => Some(elem),
            _ => None,
        }
    }

    pub fn fields(&self) -> Option<&[StructField]> {
        match self {
            ParsedType::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Number of composite levels; a scalar has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            ParsedType::Scalar(_) => 0,
            ParsedType::Array(elem) => 1 + elem.depth(),
            ParsedType::Struct(fields) => {
                1 + fields.iter().map(|f| f.ty.depth()).max().unwrap_or(0)
            }
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ParsedType::Scalar(kind) => kind.as_str(),
            ParsedType::Array(_) => "ARRAY",
            ParsedType::Struct(_) => "STRUCT",
        }
    }
}

impl From<TypeKind> for ParsedType {
    fn from(kind: TypeKind) -> Self {
        ParsedType::Scalar(kind)
    }
}

/// Writes the canonical descriptor, e.g. `ARRAY<STRUCT<a INT64, b STRING>>`.
impl Display for ParsedType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsedType::Scalar(kind) => Display::fmt(kind, f),
            ParsedType::Array(elem) => write!(f, "ARRAY<{elem}>"),
            ParsedType::Struct(fields) => {
                f.write_str("STRUCT<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(">")
            }
        }
    }
}

/// A named member of a [`ParsedType::Struct`], also used for table columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructField {
    pub name: String,
    pub ty: ParsedType,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<ParsedType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Display for StructField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}
