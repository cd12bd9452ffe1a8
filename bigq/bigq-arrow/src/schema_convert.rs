use std::sync::Arc;

use arrow::datatypes::{DataType, Field, IntervalUnit, Schema, TimeUnit};
use bigq_types::{ParsedType, StructField, TypeKind};

// ---------------------------------------------------------------------------
// Scalar kinds
// ---------------------------------------------------------------------------

/// Arrow type used for a BigQuery scalar kind.
///
/// `NUMERIC` and `BIGNUMERIC` use BigQuery's precision and scale.
/// `GEOGRAPHY` (WKT) and `JSON` are carried as UTF-8 text.
pub fn kind_to_arrow(kind: TypeKind) -> DataType {
    match kind {
        TypeKind::Int32 => DataType::Int32,
        TypeKind::Int64 => DataType::Int64,
        TypeKind::Uint32 => DataType::UInt32,
        TypeKind::Uint64 => DataType::UInt64,
        TypeKind::Float32 => DataType::Float32,
        TypeKind::Float64 => DataType::Float64,
        TypeKind::Numeric => DataType::Decimal128(38, 9),
        TypeKind::BigNumeric => DataType::Decimal256(76, 38),
        TypeKind::Bool => DataType::Boolean,
        TypeKind::String => DataType::Utf8,
        TypeKind::Bytes => DataType::Binary,
        TypeKind::Date => DataType::Date32,
        TypeKind::Datetime => DataType::Timestamp(TimeUnit::Microsecond, None),
        TypeKind::Time => DataType::Time64(TimeUnit::Microsecond),
        TypeKind::Timestamp => DataType::Timestamp(
            TimeUnit::Microsecond,
            Some(Arc::from(crate::TIMESTAMP_TZ)),
        ),
        TypeKind::Geography => DataType::Utf8,
        TypeKind::Json => DataType::Utf8,
        TypeKind::Interval => DataType::Interval(IntervalUnit::MonthDayNano),
    }
}

// ---------------------------------------------------------------------------
// Parsed type trees and table columns
// ---------------------------------------------------------------------------

/// Converts a parsed type tree into an Arrow `DataType`.
pub fn parsed_type_to_arrow(ty: &ParsedType) -> DataType {
    match ty {
        ParsedType::Scalar(kind) => kind_to_arrow(*kind),
        ParsedType::Array(elem) => list_of(parsed_type_to_arrow(elem)),
        ParsedType::Struct(fields) => {
            let arrow_fields: Vec<Field> = fields.iter().map(struct_field_to_arrow_field).collect();
            DataType::Struct(arrow_fields.into())
        }
    }
}

/// Converts table columns into an Arrow `Schema`. Columns are nullable.
pub fn fields_to_arrow_schema(fields: &[StructField]) -> Schema {
    let arrow_fields: Vec<Field> = fields.iter().map(struct_field_to_arrow_field).collect();
    Schema::new(arrow_fields)
}

fn struct_field_to_arrow_field(f: &StructField) -> Field {
    Field::new(&f.name, parsed_type_to_arrow(&f.ty), true)
}

pub(crate) fn list_of(item: DataType) -> DataType {
    DataType::List(Arc::new(Field::new("item", item, true)))
}
