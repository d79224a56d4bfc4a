//! Types describing Roman numerals: the place-value recognizers that drive
//! interpretation and the values produced from it.

/// One of the four decimal place values a numeral is decomposed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Magnitude {
    Thousands,
    Hundreds,
    Tens,
    Ones,
}

impl Magnitude {
    pub fn recognizer(&self) -> &'static Recognizer {
        match self {
            Magnitude::Thousands => &THOUSANDS,
            Magnitude::Hundreds => &HUNDREDS,
            Magnitude::Tens => &TENS,
            Magnitude::Ones => &ONES,
        }
    }
}

/// The symbol fragments needed to recognize 1×, 4×, 5×, and 9× the
/// multiplier of a single magnitude. An empty fragment is never matched.
#[derive(Debug, PartialEq, Eq)]
pub struct Recognizer {
    pub magnitude: Magnitude,
    pub one: &'static str,
    pub four: &'static str,
    pub five: &'static str,
    pub nine: &'static str,
    pub multiplier: u32,
}

// Thousands only repeat; there is no subtractive form above M.
pub const THOUSANDS: Recognizer = Recognizer {
    magnitude: Magnitude::Thousands,
    one: "M",
    four: "",
    five: "",
    nine: "",
    multiplier: 1000,
};

pub const HUNDREDS: Recognizer = Recognizer {
    magnitude: Magnitude::Hundreds,
    one: "C",
    four: "CD",
    five: "D",
    nine: "CM",
    multiplier: 100,
};

pub const TENS: Recognizer = Recognizer {
    magnitude: Magnitude::Tens,
    one: "X",
    four: "XL",
    five: "L",
    nine: "XC",
    multiplier: 10,
};

pub const ONES: Recognizer = Recognizer {
    magnitude: Magnitude::Ones,
    one: "I",
    four: "IV",
    five: "V",
    nine: "IX",
    multiplier: 1,
};

/// Recognizers in the order they are applied to the input, largest
/// magnitude first.
pub static RECOGNIZERS: [Recognizer; 4] = [THOUSANDS, HUNDREDS, TENS, ONES];

/// Every character that can appear in a well-formed numeral.
pub const SYMBOLS: &str = "MDCLXVI";

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// A single fragment consumed from the input, along with what it was worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term<'i> {
    pub magnitude: Magnitude,
    pub symbol: &'i str,
    pub value: u32,
}

/// The result of successfully interpreting a numeral. The terms are in the
/// order they were consumed and their values sum to `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral<'i> {
    pub text: &'i str,
    pub value: u32,
    pub terms: Vec<Term<'i>>,
}

impl<'i> Numeral<'i> {
    /// An empty input is valid and interprets to zero.
    pub fn is_empty(&self) -> bool {
        self.terms
            .is_empty()
    }
}
