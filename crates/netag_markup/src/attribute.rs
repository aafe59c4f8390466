//! Quoted attribute lookup inside a tag's content.

/// Returns the value of `name="..."` in `content`, if present.
///
/// A `"` preceded by a backslash does not end the value; escapes are kept
/// verbatim in the result. A missing closing quote is logged and treated as
/// an absent attribute.
#[must_use]
pub fn extract_attribute<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let opening = format!("{name}=\"");
    let start = content.find(&opening)? + opening.len();
    let value = &content[start..];

    let mut search = 0;
    loop {
        let Some(found) = value[search..].find('"') else {
            tracing::info!(
                tag = content,
                attribute = name,
                "malformed attribute: no closing quote"
            );
            return None;
        };
        let end = search + found;
        if value[..end].ends_with('\\') {
            search = end + 1;
            continue;
        }
        return Some(&value[..end]);
    }
}
