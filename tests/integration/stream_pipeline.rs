//! Stream pipeline integration tests
//!
//! Strip a document, transform the clean text, and restore it, as the
//! `netag strip` / `netag restore` commands do around an external engine.

use netag::placeholder::{FallbackPolicy, PlaceholderOptions};
use netag::runtime::{LineEntities, restore_stream, roundtrip_stream, strip_stream};

const DOCUMENT: &str = "\
The <ne entity=\"Eiffel Tower\">$landmark</ne> is <b>tall</b>.
It cost <ne entity=\"7.8\">$num</ne> million francs in <ne entity=\"1889\">$year</ne>.
No markup here.
Broken <i>markup $num
";

fn strip(options: &PlaceholderOptions) -> (String, Vec<LineEntities>) {
    let mut clean = Vec::new();
    let sidecar = strip_stream(DOCUMENT.as_bytes(), &mut clean, options).unwrap();
    (String::from_utf8(clean).unwrap(), sidecar)
}

/// Stand-in for an external engine: uppercases non-placeholder words.
fn shout(text: &str) -> String {
    text.lines()
        .map(|line| {
            line.split(' ')
                .map(|w| if w.starts_with('$') { w.to_string() } else { w.to_uppercase() })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .map(|line| format!("{line}\n"))
        .collect()
}

fn restore(transformed: &str, sidecar: &[LineEntities], options: &PlaceholderOptions) -> String {
    let mut out = Vec::new();
    restore_stream(transformed.as_bytes(), &mut out, sidecar, options).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Strip
// =============================================================================

#[test]
fn strip_produces_clean_text() {
    let (clean, sidecar) = strip(&PlaceholderOptions::default());
    assert_eq!(
        clean,
        "The $landmark is tall .\n\
         It cost $num million francs in $year .\n\
         No markup here.\n\
         Broken <i>markup $num\n"
    );
    assert_eq!(sidecar.len(), 4);
    assert_eq!(sidecar[1].entities.to_string(), r#"[2:"7.8", 6:"1889"]"#);
}

#[test]
fn strip_reject_stops_at_bad_line() {
    let options = PlaceholderOptions::default().with_fallback(FallbackPolicy::Reject);
    let mut clean = Vec::new();
    let err = strip_stream(DOCUMENT.as_bytes(), &mut clean, &options).unwrap_err();

    assert!(err.is_markup());
    assert_eq!(err.context.unwrap().line_number, Some(4));
}

// =============================================================================
// Strip, Transform, Restore
// =============================================================================

#[test]
fn transformed_text_restored() {
    let options = PlaceholderOptions::default();
    let (clean, sidecar) = strip(&options);

    let restored = restore(&shout(&clean), &sidecar, &options);
    assert_eq!(
        restored,
        "THE Eiffel Tower IS TALL .\n\
         IT COST 7.8 MILLION FRANCS IN 1889 .\n\
         NO MARKUP HERE.\n\
         BROKEN <I>MARKUP\n"
    );
}

#[test]
fn roundtrip_matches_strip_then_restore() {
    let options = PlaceholderOptions::default();
    let (clean, sidecar) = strip(&options);
    let restored = restore(&clean, &sidecar, &options);

    let mut direct = Vec::new();
    roundtrip_stream(DOCUMENT.as_bytes(), &mut direct, &options).unwrap();
    assert_eq!(String::from_utf8(direct).unwrap(), restored);
}

#[test]
fn disabled_placeholders_touch_nothing() {
    let options = PlaceholderOptions::disabled();
    let (clean, sidecar) = strip(&options);
    assert_eq!(clean, DOCUMENT);
    assert!(sidecar.iter().all(|line| line.entities.is_empty()));

    assert_eq!(restore(&clean, &sidecar, &options), DOCUMENT);
}
