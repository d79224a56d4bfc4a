//! Formatter turning interpreted numerals into tagged fragments

use crate::formatting::*;
use crate::language::*;

/// The numeral as written, with each fragment tagged by its magnitude.
pub fn render_numeral(numeral: &Numeral, renderer: &dyn Render) -> String {
    let mut output = Formatter::new();
    output.format_terms(&numeral.terms, "");
    render(renderer, output.fragments)
}

/// The numeral followed by the terms it was decomposed into and their sum,
/// for example "MCMXCVI = M + CM + XC + V + I = 1996".
pub fn render_breakdown(numeral: &Numeral, renderer: &dyn Render) -> String {
    let mut output = Formatter::new();
    output.format_breakdown(numeral);
    render(renderer, output.fragments)
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_terms(&mut self, terms: &[Term], separator: &str) {
        for (i, term) in terms
            .iter()
            .enumerate()
        {
            if i > 0 && !separator.is_empty() {
                self.append(Syntax::Operator, separator);
            }
            self.append(term.magnitude.into(), term.symbol);
        }
    }

    fn format_breakdown(&mut self, numeral: &Numeral) {
        if numeral.is_empty() {
            self.append(Syntax::Numeric, "0");
            return;
        }

        self.format_terms(&numeral.terms, "");
        self.append(Syntax::Operator, " = ");
        self.format_terms(&numeral.terms, " + ");
        self.append(Syntax::Operator, " = ");
        self.append(
            Syntax::Numeric,
            &numeral
                .value
                .to_string(),
        );
    }
}
