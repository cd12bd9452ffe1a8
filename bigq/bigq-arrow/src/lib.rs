//! Arrow integration layer for `bigq-types`.
//!
//! Two ways to obtain Arrow types from BigQuery type descriptors:
//! - [`parsed_type_to_arrow`] / [`fields_to_arrow_schema`] convert already
//!   parsed [`ParsedType`](bigq_types::ParsedType) trees and table columns.
//! - [`ArrowTypeBuilder`] plugs into the parser directly, so a descriptor is
//!   turned into an Arrow [`DataType`](arrow::datatypes::DataType) without an
//!   intermediate tree.
//!
//! Both follow the same conventions: every field and list item is nullable,
//! list items are named `item`, and `TIMESTAMP` is a microsecond timestamp
//! in UTC.
//!
//! # Typical Flow
//! ```rust
//! use arrow::datatypes::DataType;
//! use bigq_arrow::descriptor_to_arrow;
//!
//! let dt = descriptor_to_arrow("STRUCT<id INT64, name STRING>")?;
//! assert!(matches!(dt, DataType::Struct(_)));
//! # Ok::<(), bigq_types::ParseError>(())
//! ```
pub mod builder;
pub mod schema_convert;

/// Re-export of [`builder::ArrowTypeBuilder`].
pub use builder::{ArrowTypeBuilder, descriptor_to_arrow};
/// Re-exports from [`schema_convert`].
pub use schema_convert::{fields_to_arrow_schema, kind_to_arrow, parsed_type_to_arrow};

pub(crate) const TIMESTAMP_TZ: &str = "+00:00";
