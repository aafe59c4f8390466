//! The seam between placeholder handling and an external text transformation.
//!
//! ```text
//! annotated line -> strip -> clean line -> Transform -> hypotheses -> restore -> output
//! ```

use netag_foundation::Result;

use crate::options::PlaceholderOptions;
use crate::record::SentenceRecord;

/// A text transformation that does not understand markup, such as a
/// translation engine.
pub trait Transform {
    /// Transforms a clean line into one or more hypotheses, best first.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformation fails.
    fn transform(&mut self, clean_line: &str) -> Result<Vec<String>>;
}

/// Returns the clean line unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Transform for Identity {
    fn transform(&mut self, clean_line: &str) -> Result<Vec<String>> {
        Ok(vec![clean_line.to_string()])
    }
}

impl<F> Transform for F
where
    F: FnMut(&str) -> String,
{
    fn transform(&mut self, clean_line: &str) -> Result<Vec<String>> {
        Ok(vec![self(clean_line)])
    }
}

/// Runs one line through strip, transform, and restore.
///
/// # Errors
///
/// Returns an error if the line is rejected or the transformation fails.
pub fn process_line<T>(
    line: &str,
    options: &PlaceholderOptions,
    transform: &mut T,
) -> Result<Vec<String>>
where
    T: Transform + ?Sized,
{
    let record = SentenceRecord::parse(line, options)?;
    let hypotheses = transform.transform(record.clean_line())?;
    Ok(record.restore_all(hypotheses.iter().map(String::as_str)))
}
