//! Integration tests for the document view: macro resolution, filtering,
//! line lookups and full-text reconstruction.

use xres::xres::{parse, QueryError, Statement};

#[test]
fn macro_resolution_on_read() {
    let doc = parse("#define white #FFFFFF\n*fg:white\n").unwrap();
    let view = doc.view();
    assert_eq!(view.resource("*fg").unwrap(), "#FFFFFF");
    assert_eq!(view.define("white").unwrap(), "#FFFFFF");
    // The stored value is untouched.
    assert_eq!(view.resources().raw("*fg").unwrap(), "white");
}

#[test]
fn resolution_reads_the_final_define_table() {
    // The define appears after the resource; resolution still sees it.
    let doc = parse("*fg:white\n#define white #FFFFFF\n").unwrap();
    assert_eq!(doc.view().resource("*fg").unwrap(), "#FFFFFF");
}

#[test]
fn no_recursive_macro_expansion() {
    let doc = parse("#define a b\n#define b c\nr:a\n").unwrap();
    // One hop only: 'a' resolves to 'b', which is not expanded further.
    assert_eq!(doc.view().resource("r").unwrap(), "b");
}

#[test]
fn value_not_naming_a_define_comes_back_unchanged() {
    let doc = parse("#define white #FFFFFF\n*bg:black\n").unwrap();
    assert_eq!(doc.view().resource("*bg").unwrap(), "black");
}

#[test]
fn missing_keys_are_query_errors() {
    let doc = parse("a:1\n").unwrap();
    let view = doc.view();
    assert_eq!(
        view.resource("b").unwrap_err(),
        QueryError::ResourceNotFound("b".to_string())
    );
    assert_eq!(
        view.define("b").unwrap_err(),
        QueryError::DefineNotFound("b".to_string())
    );
}

#[test]
fn statement_at_finds_every_kind() {
    let doc = parse("!c\n\n#define x y\na:1\n").unwrap();
    let view = doc.view();
    assert!(matches!(view.statement_at(0).unwrap(), Statement::Comment(_)));
    assert!(matches!(view.statement_at(1).unwrap(), Statement::BlankLine(_)));
    assert!(matches!(view.statement_at(2).unwrap(), Statement::Define(_)));
    assert!(matches!(view.statement_at(3).unwrap(), Statement::Resource(_)));
    assert_eq!(view.statement_at(2).unwrap().line(), 2);
    assert_eq!(view.statement_at(4).unwrap_err(), QueryError::NoStatementAt(4));
}

#[test]
fn text_at_serializes_a_single_line() {
    let doc = parse("!c\na:1\n").unwrap();
    let view = doc.view();
    assert_eq!(view.text_at(0).unwrap(), "!c\n");
    assert_eq!(view.text_at(1).unwrap(), "a:1\n");
    assert_eq!(view.text_at(9).unwrap_err(), QueryError::NoStatementAt(9));
}

#[test]
fn full_text_round_trips_well_formed_input() {
    let text = "! terminal colors\n#define white #FFFFFF\n\nURxvt*foreground:white\nURxvt*background:#000000\n   \n";
    let doc = parse(text).unwrap();
    assert_eq!(doc.view().full_text(), text);
}

#[test]
fn full_text_normalizes_discarded_whitespace() {
    // Spaces around ':' are discarded by the grammar and absent on rebuild.
    let doc = parse("a : 1\n").unwrap();
    assert_eq!(doc.view().full_text(), "a:1\n");
}

#[test]
fn full_text_skips_lines_displaced_by_duplicates() {
    let doc = parse("a:1\na:2\n").unwrap();
    assert_eq!(doc.view().full_text(), "a:2\n");
}

#[test]
fn filter_keeps_matching_resources_and_all_defines() {
    let text = "! c\n#define white #FFFFFF\nURxvt.tabbed.foreground:white\nURxvt.tabbed.background:#000000\nEmacs.font:Iosevka\n\n";
    let doc = parse(text).unwrap();
    let filtered = doc.view().filter("URxvt.*.foreground").unwrap();
    let view = filtered.view();

    assert_eq!(view.resources().len(), 1);
    // Macro resolution still works on the filtered document.
    assert_eq!(view.resource("URxvt.tabbed.foreground").unwrap(), "#FFFFFF");
    assert_eq!(view.define("white").unwrap(), "#FFFFFF");
    // Comments and blank lines are not carried over.
    assert_eq!(view.comments().count(), 0);
    assert!(view.blank_lines().is_empty());
    // The source document is untouched.
    assert_eq!(doc.view().resources().len(), 3);
}

#[test]
fn filter_with_trailing_wildcard_pattern_fails() {
    let doc = parse("a.b:1\n").unwrap();
    assert!(doc.view().filter("a.*").is_err());
}

#[test]
fn sub_view_iteration_and_membership() {
    let doc = parse("#define w 1\na:w\nb:2\n").unwrap();
    let view = doc.view();

    assert!(view.resources().contains("a"));
    assert!(!view.resources().contains("w"));
    assert_eq!(view.resources().len(), 2);

    let mut pairs: Vec<(&str, &str)> = view.resources().iter().collect();
    pairs.sort();
    // Values come back resolved.
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);

    assert!(view.defines().contains("w"));
    assert_eq!(view.defines().iter().collect::<Vec<_>>(), vec![("w", "1")]);
}
