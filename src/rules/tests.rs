//! End-to-end tests over whole grammars.

use crate::rules::{
    ascii_range, chain, display, either, regexp, repetition, repetition_times, terminal, wrapper, Wrapper,
};
use crate::walk::{walk_bfs_name_chain, Flow};
use crate::{parse, IntoRule, Matcher, ParseError, Parser, Region, RuleRef};
use std::sync::Arc;

fn digits(name: &str) -> RuleRef {
    repetition(name, ascii_range("digit", b'0', b'9')).into_rule()
}

#[test]
fn chain_of_terminals_covers_the_input() {
    let greeting = chain("greeting", vec![terminal("hello", "hello"), terminal("space", " "), terminal("world", "world")]);

    let tree = parse(greeting, b"hello world").unwrap();
    assert_eq!(tree.name(), "greeting");
    assert_eq!(tree.region, Region::new(0, 11));
    assert_eq!(tree.data, b"hello world");
    assert_eq!(tree.children.len(), 3);
    assert_eq!(tree.children[1].region, Region::new(5, 6));
    assert_eq!(tree.children[2].data, b"world");
}

#[test]
fn either_picks_the_first_matching_alternative() {
    let value = either("value", vec![terminal("yes", "yes"), terminal("no", "no")]);

    let tree = parse(value.clone(), b"no").unwrap();
    assert_eq!(tree.name(), "value");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].name(), "no");
    assert_eq!(tree.region, tree.children[0].region);

    let err = parse(value, b"eh").unwrap_err();
    match err {
        ParseError::UnexpectedToken { rule, position, .. } => {
            assert_eq!(rule, "value");
            assert_eq!(position, 0);
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn repetition_collects_one_subtree_per_occurrence() {
    let tree = parse(digits("digits"), b"407").unwrap();
    assert_eq!(tree.children.len(), 3);
    assert_eq!(tree.data, b"407");
    assert_eq!(tree.children[1].data, b"0");
    assert_eq!(tree.children[1].region, Region::new(1, 2));
}

#[test]
fn wrapper_relabels_without_changing_coverage() {
    let tree = parse(wrapper("value", terminal("num", "7")), b"7").unwrap();
    assert_eq!(tree.name(), "value");
    assert_eq!(tree.data, b"7");
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].name(), "num");
}

#[test]
fn locations_track_lines_across_breaks() {
    let doc = chain("doc", vec![digits("digits"), terminal("newline", "\n").into_rule(), digits("digits")]);

    let tree = parse(doc, b"12\n34").unwrap();
    assert_eq!(tree.children.len(), 3);

    let first = tree.children[0].location;
    assert_eq!((first.offset, first.line, first.column), (0, 0, 0));

    let newline = tree.children[1].location;
    assert_eq!((newline.offset, newline.line, newline.column), (2, 0, 2));

    let second = tree.children[2].location;
    assert_eq!((second.offset, second.line, second.column), (3, 1, 0));
}

#[test]
fn regexp_matches_leftmost_in_the_remaining_tail() {
    let kv = chain("kv", vec![terminal("key", "k=").into_rule(), regexp("num", "[0-9]+").into_rule()]);

    let tree = parse(kv, b"k=42").unwrap();
    let num = &tree.children[1];
    assert_eq!(num.region, Region::new(2, 4));
    assert_eq!(num.data, b"42");
}

#[test]
fn regexp_regions_stay_absolute_when_the_match_floats() {
    let tree = parse(regexp("num", "[0-9]+"), b"ab12").unwrap();
    assert_eq!(tree.region, Region::new(2, 4));
    assert_eq!(tree.data, b"12");
}

#[test]
fn skipped_slots_leave_no_child_behind() {
    let maybe_sign = crate::rules::repetition_times_variadic("maybe_sign", 0, terminal("minus", "-"));
    let amount = chain("amount", vec![maybe_sign.into_rule(), digits("digits")]);

    let plain = parse(amount.clone(), b"12").unwrap();
    assert_eq!(plain.children.len(), 1);
    assert_eq!(plain.children[0].name(), "digits");

    let signed = parse(amount, b"-12").unwrap();
    assert_eq!(signed.children.len(), 2);
    assert_eq!(signed.children[0].name(), "maybe_sign");
}

#[test]
fn call_expression_grammar_parses_parenthesized_arguments() {
    let expr = chain("expr", vec![
        terminal("name", "foo").into_rule(),
        terminal("open", "(").into_rule(),
        digits("args"),
        terminal("close", ")").into_rule(),
    ]);

    let tree = parse(expr, b"foo(1234)").unwrap();
    assert_eq!(tree.region, Region::new(0, 9));
    assert_eq!(tree.children.len(), 4);

    let args = &tree.children[2];
    assert_eq!(args.name(), "args");
    assert_eq!(args.children.len(), 4);
    assert_eq!(args.data, b"1234");
}

#[test]
#[should_panic(expected = "invalid pattern")]
fn regexp_construction_rejects_bad_patterns() {
    let _ = regexp("broken", "[");
}

#[test]
#[should_panic(expected = "from")]
fn ascii_range_rejects_inverted_bounds() {
    let _ = ascii_range("inverted", b'9', b'0');
}

#[test]
fn bounded_repetition_rejects_the_first_excess_occurrence() {
    let triple = repetition_times("triple", 3, ascii_range("digit", b'0', b'9'));

    let err = Parser::new().parse(triple, b"1234").unwrap_err();
    match err {
        ParseError::UnexpectedToken { token, position, rule, .. } => {
            assert_eq!(token, "4");
            assert_eq!(position, 3);
            assert_eq!(rule, "triple");
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn bounded_repetition_shortfall_keeps_the_child_failure_as_source() {
    use std::error::Error;

    let triple = repetition_times("triple", 3, terminal("a", "a"));

    let err = Parser::new().parse(triple, b"aab").unwrap_err();
    match &err {
        ParseError::UnexpectedToken { token, position, rule, cause } => {
            assert_eq!(token, "b");
            assert_eq!(*position, 2);
            assert_eq!(rule, "triple");
            assert!(cause.is_some());
        }
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
    assert!(err.source().unwrap().to_string().contains("'a'"));
}

#[test]
fn zero_width_matches_end_the_repetition_loop() {
    let padding = repetition("padding", regexp("blank", "x*"));
    let padded = chain("padded", vec![padding.into_rule(), terminal("word", "yyy").into_rule()]);

    let tree = parse(padded, b"yyy").unwrap();
    assert_eq!(tree.children.len(), 2);
    assert!(tree.children[0].region.is_empty());
    assert_eq!(tree.children[1].data, b"yyy");
}

#[test]
fn composites_without_sub_rules_report_empty_rule() {
    let err = Parser::new().parse(chain("empty", Vec::<RuleRef>::new()), b"x").unwrap_err();
    assert_eq!(err, ParseError::EmptyRule { rule: "empty".into(), enclosing: None });

    let outer = chain("outer", vec![either("inner", Vec::<RuleRef>::new())]);
    let err = Parser::new().parse(outer, b"x").unwrap_err();
    assert_eq!(err, ParseError::EmptyRule { rule: "inner".into(), enclosing: Some("outer".into()) });
}

#[test]
fn either_on_exhausted_input_reports_eof() {
    let value = either("value", vec![terminal("yes", "yes")]);
    let err = Parser::new().parse(value, b"").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { position: 0, .. }));
}

#[test]
fn alternatives_can_be_added_after_construction() {
    let digit = either("digit", vec![terminal("one", "1")]);
    assert!(parse(digit.clone(), b"2").is_err());

    digit.add(terminal("two", "2"));
    let tree = parse(digit, b"2").unwrap();
    assert_eq!(tree.children[0].name(), "two");
}

#[test]
fn chain_links_can_be_added_after_construction() {
    let pair = chain("pair", vec![terminal("a", "a")]);
    pair.add(terminal("b", "b"));

    let tree = parse(pair, b"ab").unwrap();
    assert_eq!(tree.children.len(), 2);
}

#[test]
fn display_renders_cycles_and_absent_slots() {
    let hole: RuleRef = Arc::new(Wrapper::named("hole"));
    assert_eq!(display(&hole), "wrapper(\"hole\")[<nil>]");

    let knot = Arc::new(Wrapper::named("expr"));
    let body = chain("body", vec![terminal("open", "(").into_rule(), knot.clone().into_rule()]);
    knot.bind(body);

    let rule: RuleRef = knot;
    let text = display(&rule);
    assert!(text.starts_with("wrapper(\"expr\")[chain(\"body\")["));
    assert!(text.contains("<circular>"));
}

#[test]
fn display_shows_kind_name_and_parameters() {
    let rule: RuleRef = repetition_times("triple", 3, terminal("a", "a"));
    assert_eq!(
        display(&rule),
        "repetition(\"triple\" times=3 variadic=false)[terminal(\"a\" value=a)]",
    );
}

#[test]
fn name_chain_walks_pair_with_matchers() {
    let doc = chain("doc", vec![digits("digits"), terminal("newline", "\n").into_rule(), digits("digits")]);
    let tree = parse(doc, b"12\n34").unwrap();

    let is_digit = Matcher::All(vec![Matcher::prefix(["doc"]), Matcher::suffix(["digits", "digit"])]);
    let mut hits = 0;
    walk_bfs_name_chain::<_, _, ()>(&tree, |_, chain| {
        if is_digit.matches(chain) {
            hits += 1;
        }
        Ok(Flow::Continue)
    })
    .unwrap();
    assert_eq!(hits, 4);
}

#[test]
fn grammar_macros_build_the_same_shapes() {
    let pair = chain!("pair", [terminal("a", "a"), wrapper("rest", terminal("b", "b"))]);
    let tree = parse(pair, b"ab").unwrap();
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[1].name(), "rest");

    let value = either!("value", [terminal("yes", "yes"), terminal("no", "no")]);
    assert_eq!(parse(value, b"yes").unwrap().children[0].name(), "yes");
}

#[test]
fn recursive_grammar_parses_nested_input() {
    // expr := "(" expr ")" | "1"
    let expr = Arc::new(Wrapper::named("expr"));
    let nested = chain("nested", vec![
        terminal("open", "(").into_rule(),
        expr.clone().into_rule(),
        terminal("close", ")").into_rule(),
    ]);
    expr.bind(either("body", vec![nested.into_rule(), terminal("one", "1").into_rule()]));

    let tree = parse(expr.clone(), b"((1))").unwrap();
    assert_eq!(tree.data, b"((1))");

    let err = parse(expr, b"((1)").unwrap_err();
    assert!(err.recoverable());
}
