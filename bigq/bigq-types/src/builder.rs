//! Type construction capability injected into the parser.

use crate::{
    error::TypeBuildError,
    kind::TypeKind,
    parsed::{ParsedType, StructField},
};

/// Constructs type values on behalf of [`TypeParser`](crate::TypeParser).
///
/// The parser only decides *what* to build; representation, interning and
/// any limits on composite types belong to the implementation. Builders
/// shared between threads must be stateless or synchronize internally.
pub trait TypeBuilder {
    type Type;

    /// Build the value for a scalar keyword.
    fn scalar(&self, kind: TypeKind) -> Self::Type;

    /// Build `ARRAY<element>`.
    fn array(&self, element: Self::Type) -> Result<Self::Type, TypeBuildError>;

    /// Build `STRUCT<...>` from fields in declaration order.
    fn struct_type(
        &self,
        fields: Vec<(String, Self::Type)>,
    ) -> Result<Self::Type, TypeBuildError>;
}

impl<B: TypeBuilder + ?Sized> TypeBuilder for &B {
    type Type = B::Type;

    fn scalar(&self, kind: TypeKind) -> Self::Type {
        (**self).scalar(kind)
    }

    fn array(&self, element: Self::Type) -> Result<Self::Type, TypeBuildError> {
        (**self).array(element)
    }

    fn struct_type(
        &self,
        fields: Vec<(String, Self::Type)>,
    ) -> Result<Self::Type, TypeBuildError> {
        (**self).struct_type(fields)
    }
}

/// [`TypeBuilder`] producing plain [`ParsedType`] trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTypeBuilder {
    allow_nested_arrays: bool,
}

impl ParsedTypeBuilder {
    pub fn new() -> Self {
        Self {
            allow_nested_arrays: true,
        }
    }

    /// When `false`, `ARRAY<ARRAY<...>>` is rejected the way BigQuery's
    /// analyzer rejects it.
    pub fn with_nested_arrays(mut self, allow: bool) -> Self {
        self.allow_nested_arrays = allow;
        self
    }

    pub fn allows_nested_arrays(&self) -> bool {
        self.allow_nested_arrays
    }
}

impl Default for ParsedTypeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeBuilder for ParsedTypeBuilder {
    type Type = ParsedType;

    fn scalar(&self, kind: TypeKind) -> ParsedType {
        ParsedType::Scalar(kind)
    }

    fn array(&self, element: ParsedType) -> Result<ParsedType, TypeBuildError> {
        if !self.allow_nested_arrays && element.is_array() {
            return Err(format!("array of array types are not supported: ARRAY<{element}>").into());
        }
        Ok(ParsedType::array(element))
    }

    fn struct_type(
        &self,
        fields: Vec<(String, ParsedType)>,
    ) -> Result<ParsedType, TypeBuildError> {
        Ok(ParsedType::Struct(
            fields
                .into_iter()
                .map(|(name, ty)| StructField { name, ty })
                .collect(),
        ))
    }
}
