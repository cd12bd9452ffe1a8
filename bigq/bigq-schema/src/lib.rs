//! Table schemas for BigQuery type checking.
//!
//! - [`schema`]: JSON schema files (`{"tables": [...]}`), single file or a
//!   directory of files.
//! - [`resolver`]: parses every column type descriptor with
//!   [`bigq_types::TypeParser`] and yields typed [`TableDef`]s.
//!
//! # Pipeline
//!
//! ```text
//! schema.json / schema dir
//!   └─ Schema::load_file / load_dir   – serde_json → Schema
//!       └─ SchemaResolver::resolve    – column descriptors → TableDef
//! ```

mod error;
pub mod resolver;
pub mod schema;

pub use error::SchemaError;
pub use resolver::{SchemaResolver, TableDef};
pub use schema::{Column, Schema, Table};
