use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Result, bail};
use bigq_arrow::fields_to_arrow_schema;
use bigq_schema::SchemaResolver;
use clap::Args;

use crate::commands::load_schemas;

#[derive(Args)]
pub struct ArrowSchemaArgs {
    /// Schema JSON file
    #[arg(short, long, conflicts_with = "schema_dir")]
    schema: Option<PathBuf>,

    /// Directory of schema JSON files
    #[arg(long)]
    schema_dir: Option<PathBuf>,

    /// Only print this table
    #[arg(short, long)]
    table: Option<String>,

    /// Accept ARRAY<ARRAY<...>> column types
    #[arg(long)]
    allow_nested_arrays: bool,
}

impl ArrowSchemaArgs {
    pub fn run(self) -> Result<ExitCode> {
        let schemas = load_schemas(self.schema.as_deref(), self.schema_dir.as_deref())?;
        let selected: Vec<_> = schemas
            .iter()
            .flat_map(|(_, schema)| &schema.tables)
            .filter(|t| self.table.as_ref().is_none_or(|name| &t.name == name))
            .collect();
        if let (Some(name), true) = (&self.table, selected.is_empty()) {
            bail!("table not found: {name}");
        }

        let resolver = SchemaResolver::new().with_nested_arrays(self.allow_nested_arrays);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        for (i, table) in selected.into_iter().enumerate() {
            let table = resolver.resolve_table(table)?;
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}:", table.name)?;
            let arrow_schema = fields_to_arrow_schema(&table.columns);
            for field in arrow_schema.fields() {
                writeln!(out, "    {}: {}", field.name(), field.data_type())?;
            }
        }
        out.flush()?;

        Ok(ExitCode::SUCCESS)
    }
}
