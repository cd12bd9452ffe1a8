use bigq_types::{ParsedType, ParsedTypeBuilder, StructField, TypeKind, TypeParser, parse_type};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = TypeKind> {
    let kinds: Vec<TypeKind> = TypeKind::keywords().map(|(_, kind)| kind).collect();
    prop::sample::select(kinds)
}

fn arb_type() -> impl Strategy<Value = ParsedType> {
    arb_kind()
        .prop_map(ParsedType::Scalar)
        .prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(ParsedType::array),
                prop::collection::vec(("[a-zA-Z_][a-zA-Z0-9_]{0,8}", inner), 1..4).prop_map(
                    |fields| {
                        ParsedType::Struct(
                            fields
                                .into_iter()
                                .map(|(name, ty)| StructField::new(name, ty))
                                .collect(),
                        )
                    }
                ),
            ]
        })
}

proptest! {
    #[test]
    fn prop_printed_type_parses_back(ty in arb_type()) {
        let text = ty.to_string();
        prop_assert_eq!(text.parse::<ParsedType>(), Ok(ty));
    }

    #[test]
    fn prop_outer_whitespace_is_ignored(
        ty in arb_type(),
        head in "[ \t\r\n]{0,3}",
        tail in "[ \t\r\n]{0,3}",
    ) {
        let text = format!("{head}{ty}{tail}");
        prop_assert_eq!(text.parse::<ParsedType>(), Ok(ty));
    }

    #[test]
    fn prop_reparsing_is_idempotent(text in "[A-Za-z<>, \t]{0,40}") {
        let parser = TypeParser::new(ParsedTypeBuilder::new());
        prop_assert_eq!(parser.parse(&text), parser.parse(&text));
    }

    #[test]
    fn prop_arbitrary_input_never_panics(text in "\\PC{0,64}") {
        let _ = parse_type(&text, ParsedTypeBuilder::new());
    }

    #[test]
    fn prop_depth_matches_nesting(ty in arb_type()) {
        let parser = TypeParser::new(ParsedTypeBuilder::new()).with_max_depth(ty.depth());
        prop_assert!(parser.parse(&ty.to_string()).is_ok());
        if ty.depth() > 0 {
            let shallow = TypeParser::new(ParsedTypeBuilder::new()).with_max_depth(ty.depth() - 1);
            prop_assert!(shallow.parse(&ty.to_string()).is_err());
        }
    }
}
