//! Integration tests for the parse pass: statement dispatch, line
//! accounting, duplicate keys, and error propagation.

use xres::xres::{parse, ParseError, Parser};

#[test]
fn parses_all_four_statement_kinds() {
    let text = "! colors\n#define white #FFFFFF\n\nURxvt*foreground:white\n";
    let doc = parse(text).unwrap();
    let view = doc.view();

    assert_eq!(view.comments().collect::<Vec<_>>(), vec![" colors"]);
    assert_eq!(view.define("white").unwrap(), "#FFFFFF");
    assert_eq!(view.blank_lines(), vec![2]);
    assert_eq!(view.resource("URxvt*foreground").unwrap(), "#FFFFFF");
    assert_eq!(doc.line_count(), 4);
}

#[test]
fn empty_input_yields_empty_document() {
    let doc = parse("").unwrap();
    assert_eq!(doc.line_count(), 0);
    assert!(doc.view().resources().is_empty());
    assert!(doc.view().defines().is_empty());
    assert_eq!(doc.view().full_text(), "");
}

#[test]
fn duplicate_resource_key_last_occurrence_wins() {
    let doc = parse("a:1\na:2\n").unwrap();
    assert_eq!(doc.view().resource("a").unwrap(), "2");
    assert_eq!(doc.view().resources().len(), 1);
}

#[test]
fn duplicate_define_last_occurrence_wins() {
    let doc = parse("#define c red\n#define c blue\n").unwrap();
    assert_eq!(doc.view().define("c").unwrap(), "blue");
}

#[test]
fn blank_line_accounting() {
    let doc = parse("\na:1\n\n").unwrap();
    assert_eq!(doc.view().blank_lines(), vec![0, 2]);
}

#[test]
fn space_only_line_is_blank() {
    let doc = parse("   \na:1\n").unwrap();
    assert_eq!(doc.view().blank_lines(), vec![0]);
}

#[test]
fn idempotent_parse() {
    let text = "! c\n#define w #FFF\n\n*fg:w\nfoo.bar:baz\n";
    let first = parse(text).unwrap();
    let second = parse(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parser_is_reusable_after_clear() {
    let mut parser = Parser::new();
    let first = parser.parse("a:1\n").unwrap();
    let second = parser.parse("b:2\n").unwrap();

    assert!(first.view().resources().contains("a"));
    assert!(second.view().resources().contains("b"));
    // No residue from the first pass.
    assert!(!second.view().resources().contains("a"));
    assert_eq!(second.line_count(), 1);
}

#[test]
fn malformed_resource_aborts_with_line_number() {
    let err = parse("incorrect statement").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedResource {
            text: "incorrect statement".to_string(),
            line: 0
        }
    );

    let err = parse("a:1\nincorrect statement\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedResource { line: 1, .. }));
}

#[test]
fn malformed_define_aborts() {
    let err = parse("#define onlyname\n").unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedDefine {
            text: "#define onlyname".to_string(),
            line: 0
        }
    );
}

#[test]
fn whitespace_line_with_tab_is_malformed() {
    let err = parse(" \tx\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedWhitespace { line: 0, .. }));
}

#[test]
fn include_lines_fall_through_to_the_resource_grammar() {
    // Include resolution is out of scope; the line fails as a resource
    // because it has no ':' separator.
    let err = parse("#include \"other.Xresources\"\n").unwrap_err();
    assert!(matches!(err, ParseError::MalformedResource { line: 0, .. }));
}

#[test]
fn lone_hash_is_a_malformed_resource() {
    let err = parse("#").unwrap_err();
    assert!(matches!(err, ParseError::MalformedResource { line: 0, .. }));
}

#[test]
fn last_line_may_omit_the_terminator() {
    let doc = parse("a:1\nb:2").unwrap();
    assert_eq!(doc.view().resource("b").unwrap(), "2");
    assert_eq!(doc.line_count(), 2);
}

#[test]
fn tab_does_not_start_a_blank_line() {
    // Only the space character counts as blank; a tab-led line goes to the
    // resource grammar, which trims the identifier.
    let doc = parse("\tfoo:bar\n").unwrap();
    assert_eq!(doc.view().resource("foo").unwrap(), "bar");
}

#[test]
fn failure_returns_no_partial_document() {
    let result = parse("a:1\nb:2\nbroken line\n");
    assert!(result.is_err());
}
