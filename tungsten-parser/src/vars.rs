//! The variable table shared by the parser and every consumer of its trees.
//!
//! The parser interns variable names into the table, and trees only store the resulting indices.
//! Indices are assigned in first-seen order and are never reused or removed, so a tree stays
//! valid for as long as its table is alive.

use ariadne::Fmt;
use std::collections::HashMap;
use tungsten_attrs::ErrorKind;
use tungsten_error::{Error, ErrorKind, EXPR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The value given to newly registered variables.
pub const DEFAULT_VALUE: f64 = 0.0;

/// A variable was looked up by a name that the parser never registered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable `{}`", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        "the variable must appear in the expression".to_string()
    } else {
        format!("did you mean: {}", suggestions.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(", "))
    },
)]
pub struct UnknownVariable {
    /// The name that was looked up.
    pub name: String,

    /// Known names that are spelled similarly.
    pub suggestions: Vec<String>,
}

/// A slot in the [`VariableTable`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable {
    /// The name of the variable.
    pub name: String,

    /// The current value of the variable.
    pub value: f64,
}

/// A mapping from variable names to stable indices and current values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableTable {
    vars: Vec<Variable>,
    indices: HashMap<String, usize>,
}

impl VariableTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variable, returning its index. If the name is already registered, its existing
    /// index is returned and its value is left untouched.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }

        let index = self.vars.len();
        self.vars.push(Variable { name: name.to_owned(), value: DEFAULT_VALUE });
        self.indices.insert(name.to_owned(), index);
        index
    }

    /// Returns the index of the variable with the given name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the index of the variable with the given name, or an [`UnknownVariable`] error
    /// listing similarly named variables.
    pub fn resolve(&self, name: &str) -> Result<usize, Error> {
        self.find(name).ok_or_else(|| Error::without_spans(UnknownVariable {
            name: name.to_owned(),
            suggestions: self.suggestions(name),
        }))
    }

    /// Returns the current value of the variable at the given index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.vars.get(index).map(|var| var.value)
    }

    /// Returns the current value of the variable with the given name.
    pub fn get_by_name(&self, name: &str) -> Result<f64, Error> {
        let index = self.resolve(name)?;
        Ok(self.vars[index].value)
    }

    /// Sets the value of the variable at the given index, returning the previous value. Returns
    /// [`None`] and changes nothing if the index is out of range.
    pub fn set(&mut self, index: usize, value: f64) -> Option<f64> {
        let var = self.vars.get_mut(index)?;
        Some(std::mem::replace(&mut var.value, value))
    }

    /// Sets the value of the variable with the given name, returning the previous value.
    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<f64, Error> {
        let index = self.resolve(name)?;
        Ok(std::mem::replace(&mut self.vars[index].value, value))
    }

    /// Returns the name of the variable at the given index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.vars.get(index).map(|var| var.name.as_str())
    }

    /// Returns the number of registered variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variable has been registered.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns an iterator over the variables, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    /// Returns the registered names closest in spelling to the given name.
    fn suggestions(&self, name: &str) -> Vec<String> {
        let mut ranked = self.vars.iter()
            .map(|var| (levenshtein::levenshtein(name, &var.name), &var.name))
            .filter(|(distance, _)| *distance <= 2)
            .collect::<Vec<_>>();
        ranked.sort_by_key(|(distance, _)| *distance);
        ranked.into_iter()
            .take(3)
            .map(|(_, name)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut vars = VariableTable::new();
        assert_eq!(vars.insert("x"), 0);
        assert_eq!(vars.insert("y"), 1);
        vars.set(0, 4.0);
        assert_eq!(vars.insert("x"), 0);
        assert_eq!(vars.get(0), Some(4.0));
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn defaults_to_zero() {
        let mut vars = VariableTable::new();
        let index = vars.insert("alpha");
        assert_eq!(vars.get(index), Some(DEFAULT_VALUE));
        assert_eq!(vars.name(index), Some("alpha"));
    }

    #[test]
    fn set_and_get_by_name() {
        let mut vars = VariableTable::new();
        vars.insert("x");
        assert_eq!(vars.set_by_name("x", 2.5).unwrap(), 0.0);
        assert_eq!(vars.get_by_name("x").unwrap(), 2.5);
        assert_eq!(vars.set(7, 1.0), None);
    }

    #[test]
    fn unknown_name_suggests() {
        let mut vars = VariableTable::new();
        vars.insert("theta");
        vars.insert("x");

        let err = vars.set_by_name("thta", 1.0).unwrap_err();
        let kind = err.downcast_ref::<UnknownVariable>().unwrap();
        assert_eq!(kind.name, "thta");
        assert_eq!(kind.suggestions, vec!["theta".to_string()]);
        assert_eq!(vars.get_by_name("theta").unwrap(), 0.0);
    }

    #[test]
    fn iterates_in_index_order() {
        let mut vars = VariableTable::new();
        for name in ["b", "a", "c"] {
            vars.insert(name);
        }
        let names = vars.iter().map(|var| var.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
