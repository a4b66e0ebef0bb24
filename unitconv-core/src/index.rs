//! Symbol and name lookup shared by the catalogs
//!
//! Symbols match exactly, names match case-insensitively. Case folding is
//! ASCII-only across the workspace: `fold_case` builds keys, and direct
//! comparisons use `eq_ignore_ascii_case`.

use std::collections::HashMap;

use crate::CatalogError;

/// Key used for every case-insensitive match (ASCII upper-casing)
pub fn fold_case(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Maps symbols and names to entry positions, in insertion order.
///
/// A token resolves to at most one entry: no symbol may fold to the name
/// of a different entry.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    by_symbol: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    folded_symbols: HashMap<String, usize>,
    names: Vec<String>,
}

impl LookupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next entry, returning its position
    pub fn insert(&mut self, line: usize, name: &str, symbol: &str) -> Result<usize, CatalogError> {
        if let Some(&idx) = self.by_symbol.get(symbol) {
            return Err(self.symbol_taken(line, symbol, idx));
        }

        let name_key = fold_case(name);
        if self.by_name.contains_key(&name_key) {
            return Err(CatalogError::DuplicateName {
                line,
                name: name.to_string(),
            });
        }

        let symbol_key = fold_case(symbol);
        if let Some(&idx) = self.by_name.get(&symbol_key) {
            return Err(self.symbol_taken(line, symbol, idx));
        }
        if let Some(&idx) = self.folded_symbols.get(&name_key) {
            return Err(self.symbol_taken(line, name, idx));
        }

        let idx = self.names.len();
        self.by_symbol.insert(symbol.to_string(), idx);
        self.by_name.insert(name_key, idx);
        self.folded_symbols.entry(symbol_key).or_insert(idx);
        self.names.push(name.to_string());
        Ok(idx)
    }

    /// Position of the entry with this exact symbol, else this name
    pub fn get(&self, token: &str) -> Option<usize> {
        self.by_symbol
            .get(token)
            .or_else(|| self.by_name.get(&fold_case(token)))
            .copied()
    }

    fn symbol_taken(&self, line: usize, symbol: &str, idx: usize) -> CatalogError {
        CatalogError::DuplicateSymbol {
            line,
            symbol: symbol.to_string(),
            existing: self.names[idx].clone(),
        }
    }
}
