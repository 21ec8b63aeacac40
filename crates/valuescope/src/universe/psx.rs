//! Pakistan Stock Exchange listings.

use std::collections::BTreeSet;

/// Symbols offered for lookup.
const DEFAULT_SYMBOLS: [&str; 37] = [
    "786", "AABS", "AAL", "AASM", "AATM", "ABL", "ABOT", "ABSON", "ACPL", "ADAMS", "ADMM",
    "AGHA", "AGIC", "AGIL", "AGL", "AGLNCPS", "AGP", "AGSML", "AGTL", "AHCL", "AHL", "AHTM",
    "AICL", "AIRLINK", "AKBL", "AKDHL", "AKDSL", "AKGL", "ALAC", "ALIFE", "ALNRS", "ALTN",
    "AMBL", "AMSL", "AMTEX", "ANL", "PSX",
];

/// PSX ticker universe.
#[derive(Debug, Clone)]
pub struct PsxUniverse {
    symbols: BTreeSet<String>,
}

impl PsxUniverse {
    /// Create the universe with the default listings.
    pub fn new() -> Self {
        Self::from_symbols(DEFAULT_SYMBOLS)
    }

    /// Create a universe from custom listings. Symbols are uppercased.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(|s| s.as_ref().trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Get all symbols, sorted.
    pub fn symbols(&self) -> Vec<String> {
        self.symbols.iter().cloned().collect()
    }

    /// Listed symbol matching `symbol`, ignoring case and surrounding
    /// whitespace.
    pub fn lookup(&self, symbol: &str) -> Option<&str> {
        self.symbols
            .get(&symbol.trim().to_uppercase())
            .map(String::as_str)
    }
}

impl Default for PsxUniverse {
    fn default() -> Self {
        Self::new()
    }
}
