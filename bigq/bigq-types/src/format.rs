use std::fmt::{Error, Result, Write as _};

use crate::parsed::{ParsedType, StructField};

/// Format named fields (struct members or table columns) in a readable style:
/// scalar fields are rendered in one line, composite fields as indented blocks.
/// Nested fields follow the same rule.
pub fn format_fields(fields: impl AsRef<[StructField]>) -> std::result::Result<String, Error> {
    let mut out = String::new();
    for field in fields.as_ref() {
        format_labeled_type(&field.name, &field.ty, 0, &mut out)?;
    }
    Ok(out)
}

/// Format a single type in the same style as [`format_fields`].
pub fn format_parsed_type(ty: &ParsedType) -> std::result::Result<String, Error> {
    let mut out = String::new();
    if ty.is_scalar() {
        writeln!(out, "type: {}", ty.type_name())?;
    } else {
        format_composite(ty, 0, &mut out)?;
    }
    Ok(out)
}

fn format_composite(ty: &ParsedType, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", ty.type_name())?;

    match ty {
        ParsedType::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields {
                format_labeled_type(&child.name, &child.ty, indent + 4, out)?;
            }
        }
        ParsedType::Array(elem) => {
            format_labeled_type("item", elem, indent, out)?;
        }
        ParsedType::Scalar(_) => unreachable!("{ty:?} is not a composite type"),
    }

    Ok(())
}

fn format_labeled_type(label: &str, ty: &ParsedType, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if ty.is_scalar() {
        writeln!(out, "{pad}{label}: {}", ty.type_name())?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_composite(ty, indent + 4, out)?;
    }
    Ok(())
}
