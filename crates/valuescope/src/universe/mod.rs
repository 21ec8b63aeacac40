//! Ticker universes.
//!
//! Lookups are restricted to a closed set of listed symbols; anything
//! outside it is rejected before a request is made.

pub mod psx;

pub use psx::PsxUniverse;

/// Trait for ticker universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe. Matching ignores case and
    /// surrounding whitespace.
    fn contains(&self, symbol: &str) -> bool {
        self.resolve(symbol).is_some()
    }

    /// Canonical form of `symbol` if it is listed.
    fn resolve(&self, symbol: &str) -> Option<String> {
        let wanted = symbol.trim().to_uppercase();
        self.symbols().into_iter().find(|s| *s == wanted)
    }

    /// Get the number of listed symbols.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for PsxUniverse {
    fn symbols(&self) -> Vec<String> {
        self.symbols()
    }

    fn resolve(&self, symbol: &str) -> Option<String> {
        self.lookup(symbol).map(str::to_string)
    }
}
