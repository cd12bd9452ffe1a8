use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use bigq_schema::SchemaResolver;
use bigq_types::DEFAULT_MAX_DEPTH;
use clap::Args;
use tracing::debug;

use crate::{
    commands::load_schemas,
    format::{Diagnostic, OutputFormat},
};

#[derive(Args)]
pub struct CheckArgs {
    /// Schema JSON file
    #[arg(short, long, conflicts_with = "schema_dir")]
    schema: Option<PathBuf>,

    /// Directory of schema JSON files
    #[arg(long)]
    schema_dir: Option<PathBuf>,

    /// Diagnostic output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Accept ARRAY<ARRAY<...>> column types
    #[arg(long)]
    allow_nested_arrays: bool,

    /// Maximum ARRAY/STRUCT nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl CheckArgs {
    pub fn run(self) -> Result<ExitCode> {
        let schemas = load_schemas(self.schema.as_deref(), self.schema_dir.as_deref())?;

        let resolver = SchemaResolver::new()
            .with_nested_arrays(self.allow_nested_arrays)
            .with_max_depth(self.max_depth);

        let mut diagnostics = Vec::new();
        for (path, schema) in &schemas {
            let file = path.display().to_string();
            let errors = resolver.check(schema);
            debug!(
                tables = schema.tables.len(),
                errors = errors.len(),
                "checked {file}"
            );
            diagnostics.extend(errors.into_iter().map(|e| {
                Diagnostic::error(file.as_str(), format!("{:#}", anyhow::Error::new(e)))
            }));
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.format.write_diagnostics(&mut out, &diagnostics)?;
        out.flush()?;

        Ok(if diagnostics.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
