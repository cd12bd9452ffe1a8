use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::Result;
use bigq_arrow::parsed_type_to_arrow;
use bigq_types::{DEFAULT_MAX_DEPTH, ParsedType, ParsedTypeBuilder, TypeParser, format_parsed_type};
use clap::Args;
use tracing::debug;

use crate::format::TypeOutput;

#[derive(Args)]
pub struct ParseArgs {
    /// Type descriptors, e.g. 'ARRAY<STRUCT<id INT64, tags ARRAY<STRING>>>'
    #[arg(required = true)]
    descriptors: Vec<String>,

    /// Output style
    #[arg(short, long, value_enum, default_value_t = TypeOutput::Tree)]
    output: TypeOutput,

    /// Reject arrays of arrays
    #[arg(long)]
    strict: bool,

    /// Maximum ARRAY/STRUCT nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl ParseArgs {
    pub fn run(self) -> Result<ExitCode> {
        let builder = ParsedTypeBuilder::new().with_nested_arrays(!self.strict);
        let parser = TypeParser::new(builder).with_max_depth(self.max_depth);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut failed = 0usize;

        for (i, descriptor) in self.descriptors.iter().enumerate() {
            match parser.parse(descriptor) {
                Ok(ty) => {
                    debug!(descriptor = %descriptor, depth = ty.depth(), "parsed");
                    if i > 0 && matches!(self.output, TypeOutput::Tree) {
                        writeln!(out)?;
                    }
                    write_type(&mut out, &ty, self.output)?;
                }
                Err(e) => {
                    failed += 1;
                    eprintln!("error: {descriptor}: {e}");
                }
            }
        }

        out.flush()?;
        Ok(if failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

fn write_type(out: &mut impl Write, ty: &ParsedType, output: TypeOutput) -> Result<()> {
    match output {
        TypeOutput::Tree => write!(out, "{}", format_parsed_type(ty)?)?,
        TypeOutput::Canonical => writeln!(out, "{ty}")?,
        TypeOutput::Arrow => writeln!(out, "{}", parsed_type_to_arrow(ty))?,
    }
    Ok(())
}
