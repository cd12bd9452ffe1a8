//! Error types for schema loading and column resolution.

use std::{io, path::PathBuf};

use bigq_types::ParseError;

/// Errors produced while loading or resolving a table schema.
///
/// Messages name the failing item only; the cause is the error's source.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A schema file could not be read.
    #[error("reading schema file {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A schema directory could not be listed.
    #[error("reading schema directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A schema file is not valid schema JSON.
    #[error("parsing schema file {}", .path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory schema text is not valid schema JSON.
    #[error("parsing schema")]
    Json(#[from] serde_json::Error),

    /// A column's type descriptor was rejected.
    #[error("create table {table}: column '{column}'")]
    ColumnType {
        table: String,
        column: String,
        #[source]
        source: ParseError,
    },
}

impl SchemaError {
    /// The table a resolution error belongs to.
    pub fn table(&self) -> Option<&str> {
        match self {
            SchemaError::ColumnType { table, .. } => Some(table),
            _ => None,
        }
    }
}
