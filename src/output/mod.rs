//! Output generation for the roman CLI application

use roman::language::Numeral;
use roman::parsing::parser::ParsingError;
use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

static TEMPLATE: &'static str = "{numeral} interpretation is {value}";

/// The outcome of converting a single numeral, in the form it is reported.
#[derive(Debug, Serialize)]
pub struct Record {
    pub numeral: String,
    pub value: u32,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl Record {
    pub fn from_result(text: &str, result: &Result<Numeral, ParsingError>) -> Record {
        match result {
            Ok(numeral) => Record {
                numeral: text.to_string(),
                value: numeral.value,
                valid: true,
                problem: None,
            },
            Err(error) => Record {
                numeral: text.to_string(),
                value: 0,
                valid: false,
                problem: Some(error.message()),
            },
        }
    }
}

/// Render each record as a line of text.
pub fn via_template(records: &[Record]) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("line", TEMPLATE)?;

    let mut output = String::new();
    for record in records {
        let rendered = tt.render("line", record)?;
        output.push_str(&rendered);
        output.push('\n');
    }

    debug!("Rendered {} records as text", records.len());
    Ok(output)
}

/// Render the records as a JSON array.
pub fn via_json(records: &[Record]) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(records)?;
    output.push('\n');

    debug!("Rendered {} records as JSON", records.len());
    Ok(output)
}
