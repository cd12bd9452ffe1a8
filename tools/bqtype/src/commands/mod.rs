pub mod arrow_schema;
pub mod check;
pub mod parse;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use bigq_schema::Schema;

/// Load the schema files named by `--schema` or `--schema-dir`, each paired
/// with the path its tables came from.
pub(crate) fn load_schemas(
    file: Option<&Path>,
    dir: Option<&Path>,
) -> Result<Vec<(PathBuf, Schema)>> {
    match (file, dir) {
        (Some(file), None) => Ok(vec![(file.to_path_buf(), Schema::load_file(file)?)]),
        (None, Some(dir)) => Ok(Schema::load_dir_files(dir)?),
        (Some(_), Some(_)) => bail!("--schema and --schema-dir are mutually exclusive"),
        (None, None) => bail!("no schema given; use --schema or --schema-dir"),
    }
}
