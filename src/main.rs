use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, info, Level};

use roman::formatting::{formatter, Identity, Render, Terminal};
use roman::parsing;

mod output;
mod problem;

use output::Record;

/// The conversions shown by the demo subcommand, including three that are
/// rejected.
const SAMPLES: [&str; 7] = [
    "MCMXCVI",
    "MMMCMXCIX",
    "MMMM",
    "MDCLXVIIII",
    "CXCX",
    "MDCLXVI",
    "DCCCLXXXVIII",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Text,
    Json,
}

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("roman")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("An interpreter for Roman numerals.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging to standard error."),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Roman numerals to decimal")
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Report malformed numerals as errors rather than converting them to zero."),
                )
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .action(ArgAction::SetTrue)
                        .help("Show the terms each numeral was decomposed into."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["text", "json"])
                        .default_value("text")
                        .help("Which format to print the results in."),
                )
                .arg(
                    Arg::new("numerals")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .help("The numerals you want to convert."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check a file containing one numeral per line")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("concise")
                        .short('c')
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("Report each malformed numeral on a single line."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the numerals you want to check. Use '-' to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Print a selection of sample conversions"),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting roman {}", VERSION);

    match matches.subcommand() {
        Some(("convert", submatches)) => {
            let strict = submatches.get_flag("strict");
            let explain = submatches.get_flag("explain");
            let output = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("json") => Output::Json,
                _ => Output::Text,
            };

            let numerals: Vec<&str> = submatches
                .get_many::<String>("numerals")
                .unwrap_or_default()
                .map(String::as_str)
                .collect();

            run_convert(&numerals, strict, explain, output);
        }
        Some(("check", submatches)) => {
            let raw_output = submatches.get_flag("raw-control-chars");
            let concise = submatches.get_flag("concise");

            let filename = match submatches.get_one::<String>("filename") {
                Some(filename) => Path::new(filename),
                None => {
                    eprintln!("{}: no filename given", "error".bright_red());
                    std::process::exit(1);
                }
            };

            run_check(filename, raw_output, concise);
        }
        Some(("demo", _)) => {
            let records: Vec<Record> = SAMPLES
                .iter()
                .map(|sample| Record::from_result(sample, &parsing::interpret(sample)))
                .collect();

            print_records(&records, Output::Text);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: roman [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// Highlight only when asked to, or when the stream being written to is a
/// terminal.
fn select_renderer(raw_output: bool, terminal: bool) -> &'static dyn Render {
    if raw_output || terminal {
        &Terminal
    } else {
        &Identity
    }
}

fn print_records(records: &[Record], format: Output) {
    let result = match format {
        Output::Text => output::via_template(records).map_err(|error| error.to_string()),
        Output::Json => output::via_json(records).map_err(|error| error.to_string()),
    };

    match result {
        Ok(content) => print!("{}", content),
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            std::process::exit(1);
        }
    }
}

fn run_convert(numerals: &[&str], strict: bool, explain: bool, format: Output) {
    info!("Converting {} numerals", numerals.len());

    let renderer = select_renderer(
        false,
        std::io::stderr()
            .is_terminal(),
    );
    let highlight = select_renderer(
        false,
        std::io::stdout()
            .is_terminal(),
    );
    let mut records = Vec::new();
    let mut failed = false;

    for numeral in numerals {
        let result = parsing::interpret(numeral);

        match &result {
            Ok(value) if explain => {
                println!("{}", formatter::render_breakdown(value, highlight));
            }
            Err(error) if strict => {
                let message =
                    problem::full_parsing_error(error, Path::new("<numeral>"), numeral, renderer);
                eprintln!("{}\n", message);
                failed = true;
            }
            _ => {}
        }

        records.push(Record::from_result(numeral, &result));
    }

    print_records(&records, format);

    if failed {
        std::process::exit(1);
    }
}

fn run_check(filename: &Path, raw_output: bool, concise: bool) {
    info!("Checking file: {}", filename.display());

    let renderer = select_renderer(
        raw_output,
        std::io::stderr()
            .is_terminal(),
    );

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, renderer));
            std::process::exit(1);
        }
    };

    let entries = parsing::parse_lines(&content);
    let mut errors = 0;

    for entry in &entries {
        match &entry.result {
            Ok(numeral) => {
                debug!(line = entry.line, value = numeral.value);
            }
            Err(error) => {
                if concise {
                    let message =
                        problem::concise_parsing_error(error, filename, &content, renderer);
                    eprintln!("{}", message);
                } else {
                    let message = problem::full_parsing_error(error, filename, &content, renderer);
                    eprintln!("{}\n", message);
                }
                errors += 1;
            }
        }
    }

    if errors > 0 {
        eprintln!(
            "{}: {} of {} numeral{} malformed",
            "error".bright_red(),
            errors,
            entries.len(),
            if entries.len() == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }

    println!(
        "{} numeral{} ok",
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );
}
