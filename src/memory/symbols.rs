//! Global symbol table
//!
//! Every name lives in one flat scope. An entry is created by the first
//! assignment to a name and overwritten (type included) by each later one.
//! Entries remember the order in which names were first assigned so listings
//! read top to bottom like the program.

use super::value::{Value, ValueType};
use rustc_hash::FxHashMap;
use std::fmt;

/// One named variable
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub value_type: ValueType,
    pub value: Value,
}

/// Name → symbol map for a single run
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Symbol>,
    insertion_order: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Current value of `name`, if it was ever assigned
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.symbols.get(name).map(|symbol| &symbol.value)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.get_mut(name)
    }

    /// Create or overwrite `name`, re-inferring its type from `value`
    pub fn set(&mut self, name: &str, value: Value) {
        let value_type = value.value_type();
        match self.symbols.get_mut(name) {
            Some(symbol) => {
                symbol.value_type = value_type;
                symbol.value = value;
            }
            None => {
                self.insertion_order.push(name.to_string());
                self.symbols.insert(
                    name.to_string(),
                    Symbol {
                        name: name.to_string(),
                        value_type,
                        value,
                    },
                );
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in first-assignment order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.insertion_order
            .iter()
            .filter_map(|name| self.symbols.get(name))
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.iter().map(|s| s.name.len()).max().unwrap_or(0).max(4);
        writeln!(f, "{:<width$}  {:<7}  value", "name", "type", width = width)?;
        for symbol in self.iter() {
            writeln!(
                f,
                "{:<width$}  {:<7}  {}",
                symbol.name,
                symbol.value_type.to_string(),
                symbol.value,
                width = width
            )?;
        }
        Ok(())
    }
}
