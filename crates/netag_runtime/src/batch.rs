//! Line-by-line stream processing for the `strip`, `restore`, and
//! `roundtrip` commands.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use netag_foundation::{EntityList, Error, ErrorKind, Result};
use netag_placeholder::{
    Identity, LineStatus, PlaceholderOptions, SentenceRecord, process_line,
    substitute_with_sentinel,
};

use crate::serialize::LineEntities;

fn io_error(e: &std::io::Error) -> Error {
    Error::new(ErrorKind::Io(e.to_string()))
}

/// Strips every line of `input`, writing clean lines to `output`.
///
/// Returns one entity list per input line, for the sidecar.
///
/// # Errors
///
/// Returns an error on I/O failure, or on the first malformed line when the
/// fallback policy rejects them.
pub fn strip_stream<R, W>(
    input: R,
    mut output: W,
    options: &PlaceholderOptions,
) -> Result<Vec<LineEntities>>
where
    R: BufRead,
    W: Write,
{
    let mut sidecar = Vec::new();
    let mut passed_through = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| io_error(&e))?;
        let line_number = index + 1;
        let record = SentenceRecord::parse_at(line_number, &line, options)?;
        if record.status() == LineStatus::PassedThrough {
            passed_through += 1;
        }

        writeln!(output, "{}", record.clean_line()).map_err(|e| io_error(&e))?;
        sidecar.push(LineEntities {
            line_number,
            entities: record.entities().clone(),
        });
    }
    output.flush().map_err(|e| io_error(&e))?;

    tracing::info!(lines = sidecar.len(), passed_through, "stripped input");
    Ok(sidecar)
}

/// Restores entities into each transformed line of `input`.
///
/// Line N takes the entity list recorded for line N. Lines without a
/// recorded list are written unchanged.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn restore_stream<R, W>(
    input: R,
    mut output: W,
    sidecar: &[LineEntities],
    options: &PlaceholderOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let by_line: HashMap<usize, &EntityList> = sidecar
        .iter()
        .map(|line| (line.line_number, &line.entities))
        .collect();

    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| io_error(&e))?;
        let line_number = index + 1;

        let restored = if !options.enabled {
            line
        } else if let Some(entities) = by_line.get(&line_number) {
            substitute_with_sentinel(&line, entities.values(), options.sentinel)
        } else {
            tracing::warn!(line_number, "no entity list recorded for line");
            line
        };
        writeln!(output, "{restored}").map_err(|e| io_error(&e))?;
    }

    output.flush().map_err(|e| io_error(&e))
}

/// Strips and immediately restores every line, with no transformation in
/// between.
///
/// # Errors
///
/// Returns an error on I/O failure or a rejected line.
pub fn roundtrip_stream<R, W>(input: R, mut output: W, options: &PlaceholderOptions) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.map_err(|e| io_error(&e))?;
        let hypotheses = process_line(&line, options, &mut Identity)?;
        for hypothesis in hypotheses {
            writeln!(output, "{hypothesis}").map_err(|e| io_error(&e))?;
        }
    }

    output.flush().map_err(|e| io_error(&e))
}
