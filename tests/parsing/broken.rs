use std::fs;
use std::path::Path;

use roman::parsing;

#[test]
fn ensure_fail() {
    let dir = Path::new("tests/broken/");

    assert!(dir.exists(), "broken directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read broken directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("txt")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .txt files found in broken directory");

    let mut unexpected_successes = Vec::new();

    for file in &files {
        let content = parsing::load(&file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        for entry in parsing::parse_lines(&content) {
            if let Ok(numeral) = entry.result {
                println!(
                    "File {:?} line {} unexpectedly interpreted as {}",
                    file, entry.line, numeral.value
                );
                unexpected_successes.push(file.clone());
            }
        }
    }

    if !unexpected_successes.is_empty() {
        panic!(
            "Broken numerals should not interpret successfully, but {} passed",
            unexpected_successes.len()
        );
    }
}
