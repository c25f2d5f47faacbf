//! Reference-string input.
//!
//! Pages are integers separated by commas and/or whitespace, on one line or
//! spread over many. Blank lines are skipped and `#` starts a comment that
//! runs to the end of the line.

use crate::error::{InputError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Parse a reference string held in memory.
pub fn parse_references(text: &str) -> Result<Vec<i64>> {
    let mut pages = Vec::new();
    for (line_num, line) in text.lines().enumerate() {
        parse_line(line, line_num, &mut pages)?;
    }
    non_empty(pages)
}

/// Read a reference string from a file, one line at a time.
pub fn read_references<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| InputError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut pages = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::io(path, e))?;
        parse_line(&line, line_num, &mut pages)?;
    }
    debug!(path = %path.display(), pages = pages.len(), "read reference string");
    non_empty(pages)
}

/// Append the pages on one line to `pages`.
fn parse_line(line: &str, line_num: usize, pages: &mut Vec<i64>) -> Result<()> {
    let content = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };

    for token in content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let page = token.parse::<i64>().map_err(|_| InputError::InvalidPage {
            line: line_num + 1,
            token: token.to_string(),
        })?;
        pages.push(page);
    }
    Ok(())
}

fn non_empty(pages: Vec<i64>) -> Result<Vec<i64>> {
    if pages.is_empty() {
        Err(InputError::EmptyReferenceString)
    } else {
        Ok(pages)
    }
}

/// Render pages the way [`parse_references`] reads them.
pub fn format_references(pages: &[i64]) -> String {
    pages
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
