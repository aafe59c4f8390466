//! Attribute extraction tests.

use netag_markup::extract_attribute;

#[test]
fn finds_named_attribute() {
    let content = r#"translation="$num" entity="100""#;
    assert_eq!(extract_attribute(content, "entity"), Some("100"));
    assert_eq!(extract_attribute(content, "translation"), Some("$num"));
}

#[test]
fn absent_attribute() {
    assert_eq!(extract_attribute(r#"translation="$num""#, "entity"), None);
    assert_eq!(extract_attribute("", "entity"), None);
}

#[test]
fn escaped_quotes_do_not_end_value() {
    let content = r#"entity="say \"hi\" now" other="x""#;
    assert_eq!(extract_attribute(content, "entity"), Some(r#"say \"hi\" now"#));
}

#[test]
fn empty_value() {
    assert_eq!(extract_attribute(r#"entity="""#, "entity"), Some(""));
}

#[test]
fn missing_closing_quote_is_absent() {
    assert_eq!(extract_attribute(r#"entity="open"#, "entity"), None);
    assert_eq!(extract_attribute(r#"entity="open\""#, "entity"), None);
}

#[test]
fn value_with_spaces_and_brackets() {
    let content = r#"entity="New York [NY]""#;
    assert_eq!(extract_attribute(content, "entity"), Some("New York [NY]"));
}
