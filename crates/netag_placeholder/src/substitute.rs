//! Placeholder substitution.
//!
//! Placeholders in transformed text are replaced, left to right, by the
//! extracted entity values in list order. Word positions recorded at
//! extraction time are not consulted, so a transformation that reorders,
//! duplicates, or drops placeholders will misplace values.

/// Sentinel that starts a placeholder word such as `$num`.
pub const DEFAULT_SENTINEL: char = '$';

/// Returns true if `field` is a placeholder: longer than two characters,
/// starting with `sentinel`, followed by a letter.
#[must_use]
pub fn is_placeholder(field: &str, sentinel: char) -> bool {
    let mut chars = field.chars();
    chars.next() == Some(sentinel)
        && chars.next().is_some_and(char::is_alphabetic)
        && chars.next().is_some()
}

/// Replaces `$word` placeholders in `transformed` with `values`, in order.
///
/// Placeholders left over once `values` is exhausted are deleted. Fields are
/// rejoined with single spaces.
pub fn substitute<I, S>(transformed: &str, values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    substitute_with_sentinel(transformed, values, DEFAULT_SENTINEL)
}

/// Like [`substitute`], with a custom placeholder sentinel.
pub fn substitute_with_sentinel<I, S>(transformed: &str, values: I, sentinel: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = values.into_iter();
    let mut output = String::with_capacity(transformed.len());
    let mut deleted = 0usize;

    for field in transformed.split_whitespace() {
        if !is_placeholder(field, sentinel) {
            push_field(&mut output, field);
        } else if let Some(value) = values.next() {
            // An empty value drops the field like a deleted placeholder.
            let value = value.as_ref();
            if !value.is_empty() {
                push_field(&mut output, value);
            }
        } else {
            deleted += 1;
        }
    }

    if deleted > 0 {
        tracing::debug!(deleted, line = transformed, "more placeholders than entities");
    }
    output
}

fn push_field(output: &mut String, field: &str) {
    if !output.is_empty() {
        output.push(' ');
    }
    output.push_str(field);
}
