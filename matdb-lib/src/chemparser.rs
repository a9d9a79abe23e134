/// One element symbol with its stoichiometric count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaTerm {
    pub symbol: String,
    /// Digits after the symbol, 1 when absent. Counts too large for `u64`
    /// are capped at `u64::MAX`.
    pub count: u64,
}

/// Element/count terms of a formula, in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFormula {
    terms: Vec<FormulaTerm>,
}

impl ParsedFormula {
    pub fn terms(&self) -> &[FormulaTerm] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormulaTerm> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParsedFormula {
    type Item = &'a FormulaTerm;
    type IntoIter = std::slice::Iter<'a, FormulaTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Scanner {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Next `[A-Z][a-z]?[0-9]*` term. Characters that cannot start a term are
    /// skipped.
    fn next_term(&mut self) -> Option<FormulaTerm> {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_uppercase() {
                return Some(self.read_term());
            }
            self.pos += 1;
        }
        None
    }

    fn read_term(&mut self) -> FormulaTerm {
        let start = self.pos;
        self.pos += 1;

        // At most one lowercase letter: "Unh" reads as "Un"
        if self.peek().is_some_and(|c| c.is_ascii_lowercase()) {
            self.pos += 1;
        }
        let symbol: String = self.chars[start..self.pos].iter().collect();

        let digits_start = self.pos;
        let mut count: u64 = 0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            count = count.saturating_mul(10).saturating_add(u64::from(digit));
            self.pos += 1;
        }
        if self.pos == digits_start {
            count = 1;
        }

        FormulaTerm { symbol, count }
    }
}

/// Split a chemical formula into element/count terms.
///
/// A term is one uppercase letter, an optional lowercase letter and optional
/// digits; a missing count means 1. Anything else (parentheses, lowercase
/// starts, stray digits) is skipped, so malformed input yields fewer terms
/// rather than an error.
///
/// # Examples
/// ```
/// let parsed = matdb::chemparser::parse_formula("H2O");
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed.terms()[0].symbol, "H");
/// assert_eq!(parsed.terms()[0].count, 2);
/// assert_eq!(parsed.terms()[1].count, 1);
/// ```
pub fn parse_formula(formula: &str) -> ParsedFormula {
    let mut scanner = Scanner::new(formula);
    let mut terms = Vec::new();
    while let Some(term) = scanner.next_term() {
        terms.push(term);
    }
    ParsedFormula { terms }
}
