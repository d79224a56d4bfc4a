//! interpreter for Roman numerals

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Numeral};
use crate::parsing::parser::{Parser, ParsingError};

pub mod parser;

/// Read a file and return an owned String. We pass that ownership back to the
/// caller so that the Numerals interpreted from it can borrow from the
/// content. A filename of "-" reads standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Interpret a Roman numeral, returning its value along with the terms it
/// was built from. An empty input is valid and has the value zero.
pub fn interpret(content: &str) -> Result<Numeral<'_>, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);

    let result = input.read_numeral();

    match &result {
        Ok(numeral) => {
            debug!("{} interpreted as {}", content, numeral.value);
        }
        Err(error) => {
            debug!("{} rejected: {}", content, error);
        }
    }

    result
}

/// Convert a Roman numeral to its decimal value. Anything that cannot be
/// interpreted converts to 0, which is also what the empty string converts
/// to; use interpret() to tell the two apart.
pub fn convert(content: &str) -> u32 {
    match interpret(content) {
        Ok(numeral) => numeral.value,
        Err(_) => 0,
    }
}

/// A numeral found on one line of a larger document.
#[derive(Debug, PartialEq, Eq)]
pub struct Entry<'i> {
    /// one-origin line number
    pub line: usize,
    /// byte offset of the numeral within the document
    pub offset: usize,
    pub text: &'i str,
    pub result: Result<Numeral<'i>, ParsingError>,
}

/// Interpret every non-blank line of a document as a numeral. Surrounding
/// whitespace is ignored, and error offsets are relative to the start of the
/// whole document so they can be reported against it.
pub fn parse_lines(content: &str) -> Vec<Entry<'_>> {
    let mut entries = Vec::new();
    let mut start = 0;

    for (i, line) in content
        .split('\n')
        .enumerate()
    {
        let trimmed = line.trim_start();
        let leading = line.len() - trimmed.len();
        let text = trimmed.trim_end();

        if !text.is_empty() {
            let offset = start + leading;
            let result = interpret(text).map_err(|error| error.relocate(offset));

            entries.push(Entry {
                line: i + 1,
                offset,
                text,
                result,
            });
        }

        start += line.len() + 1;
    }

    debug!(
        "Found {} numeral{}",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );

    entries
}
