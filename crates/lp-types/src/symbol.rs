//! Maps user-chosen variable names to column indices.
//!
//! Built in first-occurrence order across the whole input (objective, then
//! constraints, in file order) so the column layout of the original `A` is
//! deterministic and reproducible across parses of the same text.

use std::collections::HashMap;

/// A single declared variable: its name, its primary column, and — once the
/// free-variable expander has run — its shadow column.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub primary: usize,
    pub shadow: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    order: Vec<Variable>,
    index_of: HashMap<String, usize>,
    free: std::collections::HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an existing column, or assign the next free one. Newly seen
    /// variables start out in the free set: whether they're free is only
    /// settled once every constraint has been seen (§ bounding-constraint
    /// short-circuit).
    pub fn get_or_insert(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index_of.get(name) {
            return self.order[idx].primary;
        }
        let primary = self.order.len();
        self.index_of.insert(name.to_string(), primary);
        self.order.push(Variable {
            name: name.to_string(),
            primary,
            shadow: None,
        });
        self.free.insert(name.to_string());
        primary
    }

    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.index_of.get(name).map(|&idx| self.order[idx].primary)
    }

    pub fn name_of(&self, primary: usize) -> Option<&str> {
        self.order.get(primary).map(|v| v.name.as_str())
    }

    pub fn is_free(&self, name: &str) -> bool {
        self.free.contains(name)
    }

    /// Remove a variable from the free set: a constraint has pinned it to be
    /// non-negative (or otherwise bounded below at parse time).
    pub fn unmark_free(&mut self, name: &str) {
        self.free.remove(name);
    }

    /// Names still free, in first-occurrence order (stable iteration matters:
    /// shadow columns are allocated in this order).
    pub fn free_names(&self) -> Vec<String> {
        self.order
            .iter()
            .map(|v| v.name.clone())
            .filter(|name| self.free.contains(name))
            .collect()
    }

    pub fn set_shadow(&mut self, name: &str, shadow: usize) {
        if let Some(&idx) = self.index_of.get(name) {
            self.order[idx].shadow = Some(shadow);
        }
    }

    pub fn shadow_of(&self, name: &str) -> Option<usize> {
        self.index_of
            .get(name)
            .and_then(|&idx| self.order[idx].shadow)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.order
    }
}
