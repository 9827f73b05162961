use std::cell::RefCell;

use crate::intern::{InternKey, InternTable};

/// An interned identifier.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(usize);

impl From<usize> for Symbol {
    fn from(id: usize) -> Self {
        Symbol(id)
    }
}

impl From<Symbol> for usize {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl InternKey for Symbol {}

/// Spelling of the reserved constructor name.
pub const INIT_NAME: &str = "<init>";

/// The identifier table shared by every node of a compilation round.
///
/// The reserved initializer symbol is interned first, so [`Names::init`] is the
/// same key in every table.
#[derive(Debug)]
pub struct Names {
    table: RefCell<InternTable<String, Symbol>>,
    init: Symbol,
}

impl Default for Names {
    fn default() -> Self {
        Self::new()
    }
}

impl Names {
    pub fn new() -> Self {
        let mut table = InternTable::new();
        let init = table.intern(INIT_NAME.to_string());
        Self {
            table: RefCell::new(table),
            init,
        }
    }

    /// The reserved name carried by every constructor.
    pub fn init(&self) -> Symbol {
        self.init
    }

    pub fn intern(&self, name: impl Into<String>) -> Symbol {
        self.table.borrow_mut().intern(name.into())
    }

    pub fn resolve(&self, symbol: Symbol) -> Option<String> {
        self.table.borrow().resolve(symbol).cloned()
    }

    /// Resolve a symbol, falling back to `<symbol:N>` for foreign keys.
    pub fn display(&self, symbol: Symbol) -> String {
        self.resolve(symbol)
            .unwrap_or_else(|| format!("<symbol:{}>", usize::from(symbol)))
    }
}
