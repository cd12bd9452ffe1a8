//! Column type resolution: schema definitions → typed tables.

use bigq_types::{ParsedTypeBuilder, StructField, TypeParser};
use tracing::{debug, warn};

use crate::{
    error::SchemaError,
    schema::{Schema, Table},
};

/// A table whose column types have all been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    /// Name as written in the schema, possibly qualified.
    pub name: String,
    pub columns: Vec<StructField>,
}

impl TableDef {
    /// Dot-separated segments of the table name,
    /// e.g. `["project", "dataset", "table"]`.
    pub fn path(&self) -> Vec<&str> {
        self.name.split('.').collect()
    }

    pub fn column(&self, name: &str) -> Option<&StructField> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Parses every column type of a [`Schema`].
///
/// By default arrays of arrays are rejected, as BigQuery does for table
/// columns; see [`SchemaResolver::with_nested_arrays`].
#[derive(Debug, Clone)]
pub struct SchemaResolver {
    parser: TypeParser<ParsedTypeBuilder>,
}

impl SchemaResolver {
    pub fn new() -> Self {
        Self {
            parser: TypeParser::new(ParsedTypeBuilder::new().with_nested_arrays(false)),
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            parser: self.parser.with_max_depth(max_depth),
        }
    }

    pub fn with_nested_arrays(self, allow: bool) -> Self {
        let builder = self.parser.builder().with_nested_arrays(allow);
        Self {
            parser: TypeParser::new(builder).with_max_depth(self.parser.max_depth()),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.parser.max_depth()
    }

    /// Parse each column of `table` in order; the first failure aborts.
    pub fn resolve_table(&self, table: &Table) -> Result<TableDef, SchemaError> {
        let mut columns = Vec::with_capacity(table.columns.len());
        for column in &table.columns {
            let ty = self
                .parser
                .parse(&column.type_name)
                .map_err(|source| SchemaError::ColumnType {
                    table: table.name.clone(),
                    column: column.name.clone(),
                    source,
                })?;
            columns.push(StructField::new(column.name.clone(), ty));
        }
        debug!(table = %table.name, columns = columns.len(), "resolved table");
        Ok(TableDef {
            name: table.name.clone(),
            columns,
        })
    }

    /// Resolve every table, stopping at the first failing one.
    pub fn resolve(&self, schema: &Schema) -> Result<Vec<TableDef>, SchemaError> {
        schema
            .tables
            .iter()
            .map(|table| self.resolve_table(table))
            .collect()
    }

    /// Resolve every table and collect one error per failing table.
    pub fn check(&self, schema: &Schema) -> Vec<SchemaError> {
        let errors: Vec<SchemaError> = schema
            .tables
            .iter()
            .filter_map(|table| self.resolve_table(table).err())
            .collect();
        if !errors.is_empty() {
            warn!(
                failed = errors.len(),
                tables = schema.tables.len(),
                "schema has invalid column types"
            );
        }
        errors
    }
}

impl Default for SchemaResolver {
    fn default() -> Self {
        Self::new()
    }
}
