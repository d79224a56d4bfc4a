use roman::{
    formatting::{Render, Syntax},
    language::*,
    parsing::parser::ParsingError,
};

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::InvalidCharacter(_, c) => (
            format!("Invalid character '{}'", c),
            format!(
                r#"
Roman numerals are written using only the symbols {}. Lower case
letters, digits, spaces, and punctuation are not part of a numeral.
                "#,
                list_symbols(renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::Misplaced(_, c) => {
            let details = match magnitude_of(*c) {
                Some(recognizer) => format!(
                    r#"
Symbols must be written largest magnitude first, and each magnitude can only
appear once. The {} are written as one of:

    {}

A unit symbol may only be repeated three times.
                    "#,
                    describe(recognizer.magnitude),
                    forms(recognizer)
                        .iter()
                        .map(|form| renderer.style(recognizer.magnitude.into(), form))
                        .collect::<Vec<String>>()
                        .join(", ")
                ),
                None => "This symbol is not allowed here.".to_string(),
            };

            (
                format!("Misplaced symbol '{}'", c),
                details
                    .trim_ascii()
                    .to_string(),
            )
        }
    }
}

fn list_symbols(renderer: &dyn Render) -> String {
    SYMBOLS
        .chars()
        .map(|c| renderer.style(Syntax::Emphasis, &c.to_string()))
        .collect::<Vec<String>>()
        .join(", ")
}

fn describe(magnitude: Magnitude) -> &'static str {
    match magnitude {
        Magnitude::Thousands => "thousands",
        Magnitude::Hundreds => "hundreds",
        Magnitude::Tens => "tens",
        Magnitude::Ones => "ones",
    }
}

/// Find the recognizer whose unit or five symbol is the given character.
fn magnitude_of(c: char) -> Option<&'static Recognizer> {
    let symbol = c.to_string();
    RECOGNIZERS
        .iter()
        .find(|recognizer| recognizer.one == symbol || recognizer.five == symbol)
}

/// Every way a magnitude can be written, from one to nine times its
/// multiplier. Thousands lack a five so stop at three.
fn forms(recognizer: &Recognizer) -> Vec<String> {
    let mut result = Vec::new();

    for n in 1..=3 {
        result.push(
            recognizer
                .one
                .repeat(n),
        );
    }

    if recognizer
        .five
        .is_empty()
    {
        return result;
    }

    result.push(
        recognizer
            .four
            .to_string(),
    );
    for n in 0..=3 {
        result.push(format!(
            "{}{}",
            recognizer.five,
            recognizer
                .one
                .repeat(n)
        ));
    }
    result.push(
        recognizer
            .nine
            .to_string(),
    );

    result
}
