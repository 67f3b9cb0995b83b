//! Compile-time symbol tables.
//!
//! The parser mirrors the block structure with a stack of [`SymbolTable`]s:
//! a child table is pushed on entering a block, function, or `for` loop and
//! popped on exit. Because the stack discipline is strict (a parent always
//! outlives its children), the stack itself is the whole arena and lookup
//! simply walks it from the top.

use logo2_util::FxHashMap;

/// What a name was declared as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Argument,
    Function,
    Enum,
}

/// A compile-time symbol.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub is_const: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_const: false,
        }
    }

    pub fn constant(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_const: true,
        }
    }
}

/// One scope's worth of symbols.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a symbol; returns false if the name is already taken in
    /// this table.
    pub fn add_symbol(&mut self, sym: Symbol) -> bool {
        use std::collections::hash_map::Entry;
        match self.symbols.entry(sym.name.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(sym);
                true
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }
}

/// The parser's scope stack.
#[derive(Debug)]
pub struct ScopeStack {
    tables: Vec<SymbolTable>,
}

impl ScopeStack {
    /// Creates a stack holding the global table.
    pub fn new() -> Self {
        Self {
            tables: vec![SymbolTable::new()],
        }
    }

    pub fn push(&mut self) {
        self.tables.push(SymbolTable::new());
    }

    pub fn pop(&mut self) {
        debug_assert!(self.tables.len() > 1);
        self.tables.pop();
    }

    /// Installs a symbol in the innermost scope.
    pub fn add_symbol(&mut self, sym: Symbol) -> bool {
        self.tables
            .last_mut()
            .expect("scope stack never empty")
            .add_symbol(sym)
    }

    /// Number of live scopes (the global table counts as one).
    pub fn depth(&self) -> usize {
        self.tables.len()
    }

    /// Pops back to the given depth. A fatal parse error can unwind past
    /// balanced pops; the next parse re-levels the stack with this.
    pub fn truncate(&mut self, depth: usize) {
        self.tables.truncate(depth.max(1));
    }

    /// Finds a symbol, walking outward unless `local_only`.
    pub fn find(&self, name: &str, local_only: bool) -> Option<&Symbol> {
        if local_only {
            return self.tables.last().and_then(|t| t.find(name));
        }
        self.tables.iter().rev().find_map(|t| t.find(name))
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
