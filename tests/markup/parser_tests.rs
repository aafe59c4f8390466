//! Annotation parser tests.
//!
//! Tests for markup removal, entity extraction, and the nesting rules.

use netag_foundation::{ErrorKind, ExtractedEntity};
use netag_markup::{AnnotationParser, Delimiters, ParserOptions, StrippedLine, strip_and_extract};

fn entities(stripped: &StrippedLine) -> Vec<(usize, &str)> {
    stripped
        .entities
        .iter()
        .map(|e| (e.position, e.value.as_str()))
        .collect()
}

fn error_kind(line: &str) -> ErrorKind {
    strip_and_extract(line).unwrap_err().kind
}

// =============================================================================
// Successful Parses
// =============================================================================

#[test]
fn unmarked_line_unchanged() {
    let stripped = strip_and_extract("nothing  to\tsee here").unwrap();
    assert_eq!(stripped.clean_line, "nothing  to\tsee here");
    assert!(stripped.entities.is_empty());
}

#[test]
fn single_entity() {
    let stripped = strip_and_extract(r#"I owe <ne entity="100">$num</ne> dollars"#).unwrap();
    assert_eq!(stripped.clean_line, "I owe $num dollars");
    assert_eq!(stripped.entities.as_slice(), &[ExtractedEntity::new(2, "100")]);
}

#[test]
fn entities_in_tag_order() {
    let line = concat!(
        r#"<ne entity="Ada">$name</ne> paid "#,
        r#"<ne translation="$num" entity="100">$num</ne> and "#,
        r#"<ne entity="200">$num</ne>"#,
    );
    let stripped = strip_and_extract(line).unwrap();
    assert_eq!(stripped.clean_line, "$name paid $num and $num");
    assert_eq!(entities(&stripped), vec![(0, "Ada"), (2, "100"), (4, "200")]);
}

#[test]
fn formatting_tags_removed() {
    let stripped = strip_and_extract("a <b>bold</b> and <i>it</i>").unwrap();
    assert_eq!(stripped.clean_line, "a bold and it");
    assert!(stripped.entities.is_empty());
}

#[test]
fn glued_words_kept_apart() {
    let stripped = strip_and_extract("a<b>c</b>d").unwrap();
    assert_eq!(stripped.clean_line, "a c d");
}

#[test]
fn entity_inside_formatting() {
    let stripped = strip_and_extract(r#"x <b><ne entity="v">$a</ne></b> y"#).unwrap();
    assert_eq!(stripped.clean_line, "x $a y");
    assert_eq!(entities(&stripped), vec![(1, "v")]);
}

#[test]
fn formatting_inside_entity() {
    let stripped = strip_and_extract(r#"<ne entity="v"><b>$a</b></ne>"#).unwrap();
    assert_eq!(stripped.clean_line, "$a");
    assert_eq!(entities(&stripped), vec![(0, "v")]);
}

#[test]
fn missing_entity_attribute_yields_empty_value() {
    let stripped = strip_and_extract(r#"<ne translation="$x">$x</ne>"#).unwrap();
    assert_eq!(entities(&stripped), vec![(0, "")]);
}

#[test]
fn escaped_quote_in_entity() {
    let stripped = strip_and_extract(r#"<ne entity="say \"hi\"">$q</ne>"#).unwrap();
    assert_eq!(entities(&stripped), vec![(0, r#"say \"hi\""#)]);
}

#[test]
fn tab_between_name_and_attributes() {
    let stripped = strip_and_extract("<ne\tentity=\"t\">$t</ne>").unwrap();
    assert_eq!(entities(&stripped), vec![(0, "t")]);
}

#[test]
fn angle_brackets_as_punctuation() {
    let stripped = strip_and_extract("3 < 4 and 5 > 2").unwrap();
    assert_eq!(stripped.clean_line, "3 < 4 and 5 > 2");
    assert!(!stripped.had_markup());
}

#[test]
fn removed_tags_counted() {
    let stripped = strip_and_extract(r#"a <b>x</b> <ne entity="1">$n</ne>"#).unwrap();
    assert_eq!(stripped.tags_removed, 4);
    assert!(stripped.had_markup());
}

#[test]
fn custom_entity_tag_and_attribute() {
    let options = ParserOptions::default()
        .with_entity_tag("ent")
        .with_entity_attribute("value");
    let parser = AnnotationParser::new(options);

    let stripped = parser
        .parse(r#"<ent value="7">$n</ent> <ne entity="x">$m</ne>"#)
        .unwrap();
    assert_eq!(stripped.clean_line, "$n $m");
    assert_eq!(entities(&stripped), vec![(0, "7")]);
}

#[test]
fn custom_delimiters() {
    let delimiters = Delimiters::new("{{", "}}").unwrap();
    let parser = AnnotationParser::new(ParserOptions::default().with_delimiters(delimiters));

    let stripped = parser.parse(r#"pay {{ne entity="5"}}$n{{/ne}} <b>"#).unwrap();
    assert_eq!(stripped.clean_line, "pay $n <b>");
    assert_eq!(entities(&stripped), vec![(1, "5")]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unterminated_tag() {
    assert_eq!(error_kind("a <b test"), ErrorKind::MalformedMarkup { offset: 2 });
}

#[test]
fn unclosed_tag() {
    assert_eq!(error_kind("<b> test"), ErrorKind::UnclosedTag { name: "b".into() });
}

#[test]
fn innermost_unclosed_tag_reported() {
    assert_eq!(error_kind("<b><i>x"), ErrorKind::UnclosedTag { name: "i".into() });
}

#[test]
fn unmatched_close() {
    assert_eq!(error_kind("x</b>"), ErrorKind::UnmatchedClose { name: "b".into() });
}

#[test]
fn crossing_tags_rejected() {
    assert_eq!(
        error_kind("<b><i>x</b></i>"),
        ErrorKind::MismatchedTagNames {
            expected: "i".into(),
            found: "b".into(),
        }
    );
}

#[test]
fn unary_tag_rejected() {
    assert_eq!(
        error_kind("line<br/>break"),
        ErrorKind::UnsupportedUnaryTag { tag: "br/".into() }
    );
}

#[test]
fn empty_close_name_is_a_nesting_error() {
    assert_eq!(error_kind("x</ b>"), ErrorKind::UnmatchedClose { name: String::new() });
    assert_eq!(
        error_kind("<a>x</ a>"),
        ErrorKind::MismatchedTagNames {
            expected: "a".into(),
            found: String::new(),
        }
    );
}

#[test]
fn entity_over_two_words() {
    assert_eq!(
        error_kind(r#"<ne entity="x">two words</ne>"#),
        ErrorKind::MultiWordEntitySpan {
            name: "ne".into(),
            start: 0,
            end: 2,
        }
    );
}

#[test]
fn entity_over_no_words() {
    assert_eq!(
        error_kind(r#"a <ne entity="x"></ne> b"#),
        ErrorKind::MultiWordEntitySpan {
            name: "ne".into(),
            start: 1,
            end: 1,
        }
    );
}

#[test]
fn every_parse_error_is_markup() {
    for line in ["a <b", "<b>", "</b>", "<b></i>", "<x/>", "</ b>", r#"<ne entity="a">b c</ne>"#] {
        assert!(strip_and_extract(line).unwrap_err().is_markup(), "{line}");
    }
}
