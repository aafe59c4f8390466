//! Sentence record tests.

use netag_foundation::ErrorKind;
use netag_markup::ParserOptions;
use netag_placeholder::{FallbackPolicy, LineStatus, PlaceholderOptions, SentenceRecord};

const ANNOTATED: &str = r#"send <ne entity="42">$num</ne> apples to <ne entity="Grace">$name</ne>"#;

#[test]
fn strip_and_restore() {
    let record = SentenceRecord::parse(ANNOTATED, &PlaceholderOptions::default()).unwrap();

    assert_eq!(record.clean_line(), "send $num apples to $name");
    assert_eq!(record.entities().to_string(), r#"[1:"42", 4:"Grace"]"#);
    assert!(record.is_annotated());
    assert_eq!(record.restore("schicke $num Äpfel an $name"), "schicke 42 Äpfel an Grace");
}

#[test]
fn every_hypothesis_restored_from_first_entity() {
    let record = SentenceRecord::parse(ANNOTATED, &PlaceholderOptions::default()).unwrap();
    let restored = record.restore_all(["$num $name", "$num", "none"]);
    assert_eq!(restored, vec!["42 Grace", "42", "none"]);
}

#[test]
fn passthrough_keeps_original_line() {
    let line = "<b>unclosed $num";
    let record = SentenceRecord::parse_at(3, line, &PlaceholderOptions::default()).unwrap();

    assert_eq!(record.status(), LineStatus::PassedThrough);
    assert_eq!(record.clean_line(), line);
    assert!(record.entities().is_empty());
    assert_eq!(record.line_number(), Some(3));
    assert_eq!(record.restore("kept $num"), "kept");
}

#[test]
fn reject_reports_line() {
    let options = PlaceholderOptions::default().with_fallback(FallbackPolicy::Reject);
    let err = SentenceRecord::parse_at(9, "x</b>", &options).unwrap_err();

    assert_eq!(err.kind, ErrorKind::UnmatchedClose { name: "b".into() });
    assert_eq!(err.context.unwrap().to_string(), "at line 9: x</b>");
}

#[test]
fn entity_without_value_keeps_its_slot() {
    let record = SentenceRecord::parse(
        r#"a <ne translation="$xy">$xy</ne> b <ne entity="7">$n</ne>"#,
        &PlaceholderOptions::default(),
    )
    .unwrap();
    assert_eq!(record.entities().to_string(), r#"[1:"", 3:"7"]"#);

    let restored = record.restore_all(["a $xy b $n", "$xy b $n", "a $xy"]);
    assert_eq!(restored, vec!["a b 7", "b 7", "a"]);
}

#[test]
fn disabled_is_identity() {
    let record = SentenceRecord::parse(ANNOTATED, &PlaceholderOptions::disabled()).unwrap();
    assert_eq!(record.status(), LineStatus::Disabled);
    assert_eq!(record.clean_line(), ANNOTATED);
    assert_eq!(record.restore("a $num"), "a $num");
}

#[test]
fn custom_entity_tag() {
    let parser = ParserOptions::default().with_entity_tag("var");
    let options = PlaceholderOptions::default().with_parser(parser);
    let record = SentenceRecord::parse(r#"x <var entity="1">$v</var>"#, &options).unwrap();
    assert_eq!(record.restore("$v y"), "1 y");
}

#[test]
fn records_are_independent_across_threads() {
    let lines = [
        r#"<ne entity="a">$x</ne>"#,
        r#"<ne entity="b">$x</ne>"#,
        r#"<ne entity="c">$x</ne>"#,
    ];
    let handles: Vec<_> = lines
        .into_iter()
        .map(|line| {
            std::thread::spawn(move || {
                SentenceRecord::parse(line, &PlaceholderOptions::default())
                    .unwrap()
                    .restore("$x")
            })
        })
        .collect();

    let restored: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(restored, vec!["a", "b", "c"]);
}
