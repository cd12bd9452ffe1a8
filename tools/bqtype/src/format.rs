use std::{
    fmt,
    io::{self, Write},
};

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    GithubActions,
}

/// A single finding reported by `bqtype check`.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub file: String,
    /// 1-based, 0 when unknown.
    pub line: usize,
    /// 1-based, 0 when unknown.
    pub column: usize,
    pub level: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: 0,
            column: 0,
            level: "error",
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.file.is_empty() && self.line > 0 {
            write!(
                f,
                "{}:{}:{}: {}: {}",
                self.file, self.line, self.column, self.level, self.message
            )
        } else if !self.file.is_empty() {
            write!(f, "{}: {}: {}", self.file, self.level, self.message)
        } else {
            write!(f, "{}: {}", self.level, self.message)
        }
    }
}

impl OutputFormat {
    pub fn write_diagnostics(&self, out: &mut impl Write, diagnostics: &[Diagnostic]) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                for d in diagnostics {
                    writeln!(out, "{d}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, diagnostics)?;
                writeln!(out)?;
            }
            OutputFormat::GithubActions => {
                for d in diagnostics {
                    writeln!(
                        out,
                        "::{} file={},line={},col={}::{}",
                        d.level, d.file, d.line, d.column, d.message
                    )?;
                }
            }
        }
        Ok(())
    }
}

/// How `bqtype parse` prints each parsed type.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum TypeOutput {
    /// Indented block, one line per field
    Tree,
    /// Normalized descriptor on one line
    Canonical,
    /// Arrow data type
    Arrow,
}
