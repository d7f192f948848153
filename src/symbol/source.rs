//! Source of interned symbols.

use std::collections::HashMap;

use crate::symbol::Symbol;

/// A source of named symbols.
///
/// Names are interned: the same spelling always yields the same symbol,
/// no matter which pass asks for it. The reserved symbols are never
/// returned by interning, so a grammar may use `#` as an ordinary terminal.
#[derive(Clone, Debug)]
pub struct SymbolSource {
    names: Vec<String>,
    interned: HashMap<String, Symbol>,
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource {
    /// Creates a source that contains only the reserved symbols.
    pub fn new() -> Self {
        SymbolSource {
            names: vec!["ε".to_string(), "#".to_string()],
            interned: HashMap::new(),
        }
    }

    /// Retrieves an interned symbol, or generates a new one if the name was never
    /// seen before.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.interned.get(name) {
            return sym;
        }
        let sym = Symbol::from(self.names.len());
        self.names.push(name.to_string());
        self.interned.insert(name.to_string(), sym);
        sym
    }

    /// Looks up an interned symbol without generating one.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.interned.get(name).copied()
    }

    /// Generates a symbol named `<base><n>` for the smallest `n >= 1` that is not taken.
    pub fn fresh_numbered(&mut self, base: &str) -> Symbol {
        let mut n = 1usize;
        loop {
            let name = format!("{}{}", base, n);
            if !self.interned.contains_key(&name) {
                return self.intern(&name);
            }
            n += 1;
        }
    }

    /// Generates a symbol named `<base>'`, adding primes until the name is not taken.
    pub fn fresh_primed(&mut self, base: &str) -> Symbol {
        let mut name = format!("{}'", base);
        while self.interned.contains_key(&name) {
            name.push('\'');
        }
        self.intern(&name)
    }

    /// Returns the display name of a symbol.
    pub fn name(&self, sym: Symbol) -> &str {
        self.names.get(sym.usize()).map_or("?", |name| &name[..])
    }

    /// Concatenates the names of a string of symbols. The empty string is
    /// written as `ε`.
    pub fn stringify(&self, syms: &[Symbol]) -> String {
        if syms.is_empty() {
            return self.name(Symbol::EPSILON).to_string();
        }
        syms.iter().map(|&sym| self.name(sym)).collect()
    }

    /// Returns the number of symbols in use, including the reserved ones.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }
}
