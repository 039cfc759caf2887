//! Unit tests for the cssx compiler
//!
//! Tests parse-then-build output, error cases, and the postfix stack
//! properties of generated pipelines.

use cssx_compiler::*;
use proptest::prelude::*;

// =============================================================================
// Compile Output Tests
// =============================================================================

#[test]
fn test_compile_examples() {
    let cases: Vec<(&str, Vec<Op>)> = vec![
        (".product", vec![Op::select(".product")]),
        (".section .item", vec![Op::select(".section .item")]),
        (
            ":count(.product)",
            vec![Op::select(".product"), Op::call("count", 1)],
        ),
        (
            ":first(section)",
            vec![Op::select("section"), Op::call("first", 1)],
        ),
        (
            ":text(:first(h1))",
            vec![Op::select("h1"), Op::call("first", 1), Op::call("text", 1)],
        ),
        (
            r#":attr("href", :first(a.cta))"#,
            vec![
                Op::str("href"),
                Op::select("a.cta"),
                Op::call("first", 1),
                Op::call("attr", 2),
            ],
        ),
        (
            r#":first(a[href*="x,y"])"#,
            vec![Op::select(r#"a[href*="x,y"]"#), Op::call("first", 1)],
        ),
        (
            ":text(:nth(2, .section .item))",
            vec![
                Op::num(2.0),
                Op::select(".section .item"),
                Op::call("nth", 2),
                Op::call("text", 1),
            ],
        ),
        (
            ".section .item >> :nth(2) >> :text()",
            vec![
                Op::select(".section .item"),
                Op::num(2.0),
                Op::call("nth", 1),
                Op::call("text", 0),
            ],
        ),
    ];

    for (input, want) in cases {
        let got = compile(input).unwrap_or_else(|e| panic!("unexpected error for {:?}: {}", input, e));
        assert_eq!(got.ops, want, "for {:?}", input);
    }
}

#[test]
fn test_piped_calls_are_reported_out_of_band() {
    let pipeline = compile(".section .item >> :nth(2) >> :text()").unwrap();
    assert_eq!(pipeline.metadata.piped_calls, vec![2, 3]);

    // The same calls written nested are ordinary calls
    let pipeline = compile(":text(:nth(2, .section .item))").unwrap();
    assert!(pipeline.metadata.piped_calls.is_empty());
}

#[test]
fn test_piped_stage_with_nested_call() {
    let pipeline = compile(r#"a.cta >> :attr("href")  >> :trim(:lower("X"))"#).unwrap();
    assert_eq!(
        pipeline.ops,
        vec![
            Op::select("a.cta"),
            Op::str("href"),
            Op::call("attr", 1),
            Op::str("X"),
            Op::call("lower", 1),
            Op::call("trim", 1),
        ]
    );
    // Only the stage calls are piped, not the nested :lower
    assert_eq!(pipeline.metadata.piped_calls, vec![2, 5]);
}

#[test]
fn test_compile_errors() {
    let cases = [
        "",
        "   \t\n",
        ":text(",
        ".section >> text()",
        ":first(a) >> :text()",
        ":text(h1) trailing",
    ];
    for input in cases {
        assert!(compile(input).is_err(), "expected error for {:?}", input);
    }
}

#[test]
fn test_compile_rejects_out_of_range_number() {
    let err = compile(&format!(":nth({})", "9".repeat(400))).unwrap_err();
    assert_eq!(err, ParseError::new(ParseErrorKind::InvalidNumber, 5));
}

#[test]
fn test_build_pipeline_from_parsed_ast() {
    let ast = parse(":text(:first(h1))").unwrap();
    let pipeline = build_pipeline(&ast).unwrap();
    assert_eq!(pipeline, compile(":text(:first(h1))").unwrap());
}

#[test]
fn test_disassemble() {
    let pipeline = compile("h1 >> :text()").unwrap();
    let listing = pipeline.disassemble();
    assert!(listing.contains(r#"select "h1""#));
    assert!(listing.contains("call text/0 (piped)"));
}

#[test]
fn test_pipeline_serde_roundtrip() {
    let pipeline = compile(r#":attr("href", :first(a.cta))"#).unwrap();
    let json = serde_json::to_string(&pipeline).unwrap();
    assert!(json.contains(r#"{"kind":"Str","value":"href"}"#));

    let back: Pipeline = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pipeline);
}

#[test]
fn test_compiler_default_options() {
    let options = CompilerOptions::default();
    assert!(options.enable_stack_analysis);
    assert!(options.include_piped_operand);
    assert_eq!(options.parser, ParserOptions::default());
}

#[test]
fn test_compiler_reports_syntax_error_position() {
    let err = Compiler::new().compile(".a >> :nth(").unwrap_err();
    match err {
        CompileError::Syntax(ParseError { kind, pos }) => {
            assert_eq!(kind, ParseErrorKind::UnexpectedEof);
            assert_eq!(pos, 11);
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

// =============================================================================
// Property Tests
// =============================================================================

/// Generates well-formed cssx source text
fn source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z]{1,6}(\\.[a-z]{1,4})?",
        "[a-z]{1,5}".prop_map(|s| format!("\"{}\"", s)),
        (0u32..100).prop_map(|n| n.to_string()),
        Just(r#"a[href*="x,y"]"#.to_string()),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-z]{1,6}", prop::collection::vec(inner, 0..4))
            .prop_map(|(name, args)| format!(":{}({})", name, args.join(", ")))
    })
}

fn pipeline_source() -> impl Strategy<Value = String> {
    let stage = ("[a-z]{1,6}", prop::collection::vec(source(), 0..3))
        .prop_map(|(name, args)| format!(":{}({})", name, args.join(", ")));
    ("[a-z]{1,6}", prop::collection::vec(stage, 1..4))
        .prop_map(|(base, stages)| format!("{} >> {}", base, stages.join(" >> ")))
}

proptest! {
    #[test]
    fn prop_compile_is_deterministic(input in source()) {
        let first = compile(&input);
        let second = compile(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_calls_consume_exactly_their_arity(input in source()) {
        let pipeline = compile(&input).unwrap();
        let mut depth = 0usize;
        for op in &pipeline.ops {
            if let Op::Call { arity, .. } = op {
                prop_assert!(depth >= *arity);
                depth -= *arity;
            }
            depth += 1;
        }
        prop_assert_eq!(depth, 1);
    }

    #[test]
    fn prop_pipelines_balance_with_piped_operand(input in pipeline_source()) {
        let pipeline = compile(&input).unwrap();
        let profile = StackAnalyzer::new().analyze(&pipeline).unwrap();
        prop_assert!(profile.is_balanced());
    }
}
