#[cfg(test)]
mod verify {
    use roman::language::*;
    use roman::parsing::{self, parser::ParsingError};

    #[test]
    fn empty_is_distinct_from_malformed() {
        let numeral = parsing::interpret("").unwrap();
        assert!(numeral.is_empty());
        assert_eq!(numeral.value, 0);

        assert!(parsing::interpret("CXCX").is_err());
    }

    #[test]
    fn terms_of_numeral() {
        let numeral = parsing::interpret("MCDXLIV").unwrap();

        assert_eq!(numeral.text, "MCDXLIV");
        assert_eq!(numeral.value, 1444);
        assert_eq!(
            numeral.terms,
            vec![
                Term {
                    magnitude: Magnitude::Thousands,
                    symbol: "M",
                    value: 1000
                },
                Term {
                    magnitude: Magnitude::Hundreds,
                    symbol: "CD",
                    value: 400
                },
                Term {
                    magnitude: Magnitude::Tens,
                    symbol: "XL",
                    value: 40
                },
                Term {
                    magnitude: Magnitude::Ones,
                    symbol: "IV",
                    value: 4
                },
            ]
        );

        let sum: u32 = numeral
            .terms
            .iter()
            .map(|term| term.value)
            .sum();
        assert_eq!(sum, numeral.value);
    }

    #[test]
    fn excess_repetition() {
        assert_eq!(
            parsing::interpret("MDCLXVIIII"),
            Err(ParsingError::Misplaced(9, 'I'))
        );
        assert_eq!(
            parsing::interpret("MMMM"),
            Err(ParsingError::Misplaced(3, 'M'))
        );
    }

    #[test]
    fn wrong_order() {
        assert_eq!(
            parsing::interpret("CXCX"),
            Err(ParsingError::Misplaced(3, 'X'))
        );
        assert_eq!(
            parsing::interpret("IM"),
            Err(ParsingError::Misplaced(1, 'M'))
        );
        assert_eq!(
            parsing::interpret("IXI"),
            Err(ParsingError::Misplaced(2, 'I'))
        );
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(
            parsing::interpret("XIV!"),
            Err(ParsingError::InvalidCharacter(3, '!'))
        );
        assert_eq!(
            parsing::interpret("xiv"),
            Err(ParsingError::InvalidCharacter(0, 'x'))
        );

        // offsets are in bytes, not characters
        assert_eq!(
            parsing::interpret("XⅡ"),
            Err(ParsingError::InvalidCharacter(1, 'Ⅱ'))
        );
    }

    #[test]
    fn error_messages() {
        let error = parsing::interpret("CXCX").unwrap_err();
        assert_eq!(error.offset(), 3);
        assert_eq!(error.message(), "misplaced symbol 'X'");
        assert_eq!(error.to_string(), "misplaced symbol 'X' at offset 3");
    }

    #[test]
    fn lines_of_document() {
        let content = "MCMXCVI\n\n   XLII  \nCXCX\n";
        let entries = parsing::parse_lines(content);

        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].line, 1);
        assert_eq!(entries[0].offset, 0);
        assert_eq!(entries[0].text, "MCMXCVI");

        assert_eq!(entries[1].line, 3);
        assert_eq!(entries[1].offset, 12);
        assert_eq!(entries[1].text, "XLII");
        assert_eq!(
            entries[1]
                .result
                .as_ref()
                .map(|numeral| numeral.value),
            Ok(42)
        );

        assert_eq!(entries[2].line, 4);
        assert_eq!(entries[2].offset, 19);
        assert_eq!(entries[2].result, Err(ParsingError::Misplaced(22, 'X')));
    }
}
