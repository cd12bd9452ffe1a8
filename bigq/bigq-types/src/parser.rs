//! Recursive descent parser for type descriptors.
//!
//! ```text
//! type   := scalar | array | struct
//! scalar := keyword                        (case-insensitive, whole string)
//! array  := "ARRAY<" type ">"
//! struct := "STRUCT<" field ("," field)* ">"
//! field  := name " " type                  (first top-level space)
//! ```
//!
//! Keywords and prefixes are compared ASCII case-insensitively, while every
//! slice handed to a recursive call or used as a field name keeps the caller's
//! original case. Splitting on `,` and on the name/type space only happens at
//! bracket depth 0, where depth counts `<` and `>` and nothing else.

use std::str::FromStr;

use crate::{
    builder::{ParsedTypeBuilder, TypeBuilder},
    error::ParseError,
    kind::TypeKind,
    parsed::ParsedType,
};

/// Composite nesting accepted by [`parse_type`] and a default [`TypeParser`].
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Trimmed around a whole (sub-)descriptor.
const TYPE_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];
/// Trimmed around a struct field clause and its type text.
const FIELD_WHITESPACE: &[char] = &[' ', '\t'];

const ARRAY_PREFIX: &str = "ARRAY<";
const STRUCT_PREFIX: &str = "STRUCT<";

/// Parses `descriptor` with [`DEFAULT_MAX_DEPTH`], building types through `builder`.
pub fn parse_type<B: TypeBuilder>(descriptor: &str, builder: B) -> Result<B::Type, ParseError> {
    TypeParser::new(builder).parse(descriptor)
}

/// Type descriptor parser bound to a [`TypeBuilder`].
///
/// The parser keeps no state between calls; parsing the same text twice
/// with the same builder yields equal results.
#[derive(Debug, Clone)]
pub struct TypeParser<B> {
    builder: B,
    max_depth: usize,
}

impl<B: TypeBuilder> TypeParser<B> {
    pub fn new(builder: B) -> Self {
        Self {
            builder,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Maximum number of enclosing `ARRAY<>`/`STRUCT<>` levels. Each level
    /// costs one stack frame, so very large values give up the stack guard.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn parse(&self, descriptor: &str) -> Result<B::Type, ParseError> {
        self.parse_at(descriptor, 0)
    }

    fn parse_at(&self, descriptor: &str, depth: usize) -> Result<B::Type, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::NestingTooDeep {
                max_depth: self.max_depth,
            });
        }

        let trimmed = descriptor.trim_matches(TYPE_WHITESPACE);
        if trimmed.is_empty() {
            return Err(ParseError::EmptyType);
        }

        if let Some(kind) = TypeKind::from_keyword(trimmed) {
            return Ok(self.builder.scalar(kind));
        }

        if let Some(body) = composite_body(trimmed, ARRAY_PREFIX, 1) {
            let element = self.parse_at(body, depth + 1)?;
            return Ok(self.builder.array(element)?);
        }

        // `STRUCT<>` still counts as a struct so that it reports the empty field.
        if let Some(body) = composite_body(trimmed, STRUCT_PREFIX, 0) {
            let mut fields = Vec::new();
            for clause in TopLevelSplit::new(body, b',') {
                fields.push(self.parse_field(clause, depth)?);
            }
            return Ok(self.builder.struct_type(fields)?);
        }

        Err(ParseError::UnknownType {
            descriptor: descriptor.to_string(),
        })
    }

    fn parse_field(&self, clause: &str, depth: usize) -> Result<(String, B::Type), ParseError> {
        let clause = clause.trim_matches(FIELD_WHITESPACE);
        if clause.is_empty() {
            return Err(ParseError::EmptyStructField);
        }

        let Some(split) = find_top_level(clause, b' ') else {
            return Err(ParseError::InvalidStructField {
                field: clause.to_string(),
            });
        };

        let name = &clause[..split];
        let type_text = clause[split + 1..].trim_start_matches(FIELD_WHITESPACE);
        let ty = self.parse_at(type_text, depth + 1)?;
        Ok((name.to_string(), ty))
    }
}

impl FromStr for ParsedType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s, ParsedTypeBuilder::new())
    }
}

/// Returns the text between `prefix` and a trailing `>` when `trimmed` has
/// that shape and the body is at least `min_body` bytes long.
fn composite_body<'a>(trimmed: &'a str, prefix: &str, min_body: usize) -> Option<&'a str> {
    let bytes = trimmed.as_bytes();
    if bytes.len() < prefix.len() + min_body + 1 {
        return None;
    }
    if !bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes()) || !trimmed.ends_with('>') {
        return None;
    }
    Some(&trimmed[prefix.len()..trimmed.len() - 1])
}

/// Byte offset of the first `target` outside any `<...>` region.
///
/// All bytes of interest are ASCII, so offsets are always char boundaries.
fn find_top_level(text: &str, target: u8) -> Option<usize> {
    let mut depth = 0i32;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'<' => depth += 1,
            b'>' => depth -= 1,
            _ if b == target && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Splits on top-level `separator`; the end of input closes the last segment,
/// so an empty body still yields one (empty) segment.
struct TopLevelSplit<'a> {
    rest: Option<&'a str>,
    separator: u8,
}

impl<'a> TopLevelSplit<'a> {
    fn new(text: &'a str, separator: u8) -> Self {
        Self {
            rest: Some(text),
            separator,
        }
    }
}

impl<'a> Iterator for TopLevelSplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match find_top_level(rest, self.separator) {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

