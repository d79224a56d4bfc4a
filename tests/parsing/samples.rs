#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use roman::parsing;

    fn collect(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

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

        assert!(!files.is_empty(), "No .txt files found in {:?}", dir);
        files
    }

    #[test]
    fn ensure_samples_interpret() {
        let files = collect(Path::new("tests/samples/"));

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let entries = parsing::parse_lines(&content);
            assert!(!entries.is_empty(), "File {:?} has no numerals", file);

            for entry in &entries {
                if let Err(e) = &entry.result {
                    println!("File {:?} line {} failed: {}", file, entry.line, e);
                    failures.push(file.clone());
                }
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should interpret successfully, but {} numerals failed",
                failures.len()
            );
        }
    }

    #[test]
    fn years_sample_values() {
        let content = parsing::load(Path::new("tests/samples/years.txt")).unwrap();

        let values: Vec<u32> = parsing::parse_lines(&content)
            .into_iter()
            .filter_map(|entry| {
                entry
                    .result
                    .ok()
                    .map(|numeral| numeral.value)
            })
            .collect();

        assert_eq!(values, vec![1066, 1492, 1666, 1776, 1914, 1996, 2024]);
    }

    #[test]
    fn missing_file() {
        let result = parsing::load(Path::new("tests/samples/nonexistent.txt"));
        let error = result.unwrap_err();

        assert_eq!(error.problem, "File not found");
        assert_eq!(error.to_string(), "File not found");
    }
}
