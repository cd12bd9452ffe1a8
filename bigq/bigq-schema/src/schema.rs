//! Table schema definitions loaded from JSON.
//!
//! ```json
//! {
//!   "tables": [
//!     {
//!       "name": "project.dataset.events",
//!       "columns": [
//!         {"name": "id", "type": "INT64"},
//!         {"name": "payload", "type": "STRUCT<kind STRING, tags ARRAY<STRING>>"}
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SchemaError;

/// A collection of table definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// A table definition; `name` may be qualified (`project.dataset.table`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// A column with its unparsed type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Schema {
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a schema from a JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| SchemaError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Schema =
            serde_json::from_str(&data).map_err(|source| SchemaError::ParseFile {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), tables = schema.tables.len(), "loaded schema file");
        Ok(schema)
    }

    /// Load and merge every `*.json` file directly inside `dir`.
    ///
    /// Files are read in file-name order; subdirectories are not descended.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let mut merged = Schema::default();
        for (_, schema) in Schema::load_dir_files(dir)? {
            merged.tables.extend(schema.tables);
        }
        Ok(merged)
    }

    /// Like [`Schema::load_dir`], but keeps each file's schema apart,
    /// paired with the path it was read from.
    pub fn load_dir_files(dir: impl AsRef<Path>) -> Result<Vec<(PathBuf, Schema)>, SchemaError> {
        let dir = dir.as_ref();
        let read_dir_err = |source: std::io::Error| SchemaError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_err)? {
            let path = entry.map_err(read_dir_err)?.path();
            if path.is_dir() || path.extension() != Some(OsStr::new("json")) {
                debug!(path = %path.display(), "skipping non-schema entry");
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        let schemas = paths
            .into_iter()
            .map(|path| Schema::load_file(&path).map(|schema| (path, schema)))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(dir = %dir.display(), files = schemas.len(), "loaded schema directory");
        Ok(schemas)
    }
}
