//! BigQuery type descriptor parsing.
//!
//! Turns descriptors such as `ARRAY<STRUCT<a INT64, b ARRAY<STRING>>>` into
//! type values. Composite types are constructed through an injected
//! [`TypeBuilder`], so callers choose the representation: [`ParsedType`]
//! trees via [`ParsedTypeBuilder`], or their own (e.g. Arrow data types).
//!
//! ```rust
//! use bigq_types::{ParsedType, ParsedTypeBuilder, TypeKind, parse_type};
//!
//! let ty = parse_type("array<struct<id INT64, tags ARRAY<STRING>>>", ParsedTypeBuilder::new())?;
//! let fields = ty.element().and_then(ParsedType::fields).unwrap_or_default();
//! assert_eq!(fields[0].name, "id");
//! assert_eq!(fields[0].ty, ParsedType::Scalar(TypeKind::Int64));
//! assert_eq!(ty.to_string(), "ARRAY<STRUCT<id INT64, tags ARRAY<STRING>>>");
//! # Ok::<(), bigq_types::ParseError>(())
//! ```

mod builder;
mod error;
mod format;
mod kind;
mod parsed;
mod parser;

pub use builder::{ParsedTypeBuilder, TypeBuilder};
pub use error::{ParseError, ParseErrorKind, TypeBuildError};
pub use format::{format_fields, format_parsed_type};
pub use kind::TypeKind;
pub use parsed::{ParsedType, StructField};
pub use parser::{DEFAULT_MAX_DEPTH, TypeParser, parse_type};
