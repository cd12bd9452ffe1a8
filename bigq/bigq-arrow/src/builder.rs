use std::collections::HashSet;

use arrow::datatypes::{DataType, Field};
use bigq_types::{ParseError, TypeBuildError, TypeBuilder, TypeKind, parse_type};

use crate::schema_convert::{kind_to_arrow, list_of};

/// [`TypeBuilder`] that produces Arrow data types directly.
///
/// Struct field names must be unique, since Arrow resolves struct children
/// by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowTypeBuilder;

impl ArrowTypeBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl TypeBuilder for ArrowTypeBuilder {
    type Type = DataType;

    fn scalar(&self, kind: TypeKind) -> DataType {
        kind_to_arrow(kind)
    }

    fn array(&self, element: DataType) -> Result<DataType, TypeBuildError> {
        Ok(list_of(element))
    }

    fn struct_type(&self, fields: Vec<(String, DataType)>) -> Result<DataType, TypeBuildError> {
        if let Some(name) = first_duplicate(&fields) {
            return Err(format!("duplicate field name '{name}' in STRUCT").into());
        }

        let arrow_fields: Vec<Field> = fields
            .into_iter()
            .map(|(name, dt)| Field::new(name, dt, true))
            .collect();
        Ok(DataType::Struct(arrow_fields.into()))
    }
}

fn first_duplicate(fields: &[(String, DataType)]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(fields.len());
    fields
        .iter()
        .map(|(name, _)| name.as_str())
        .find(|name| !seen.insert(*name))
}

/// Parse `descriptor` straight into an Arrow `DataType`.
pub fn descriptor_to_arrow(descriptor: &str) -> Result<DataType, ParseError> {
    parse_type(descriptor, ArrowTypeBuilder::new())
}
