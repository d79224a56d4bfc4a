use super::messages::generate_error_message;
use roman::{
    formatting::{Render, Syntax},
    language::LoadingError,
    parsing::parser::ParsingError,
};
use std::path::Path;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    let gutter = renderer.style(Syntax::Gutter, "|");
    let number = renderer.style(Syntax::Gutter, &format!("{:>width$}", line));
    let caret = renderer.style(Syntax::Caret, "^");

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{} {} {}
{:width$} {} {}{}

{}
        "#,
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Emphasis, &problem),
        ' ',
        gutter,
        number,
        gutter,
        code,
        ' ',
        gutter,
        " ".repeat(j),
        caret,
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, _) = generate_error_message(error, renderer);
    let offset = error.offset();
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{}:{} {}",
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Emphasis, &problem),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>, renderer: &dyn Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Error, "error"),
        error
            .filename
            .display(),
        renderer.style(Syntax::Emphasis, &error.to_string())
    )
}

// These return zero-origin results so that they can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
