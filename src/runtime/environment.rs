//! Variable bindings with lexical scoping

use std::collections::HashMap;

use crate::runtime::Number;

/// A name to value mapping, optionally chained to an enclosing scope.
///
/// Lookups walk outward, nearest scope first. Writes only touch this scope.
/// The global environment has no parent and is owned by the caller for the
/// whole session.
#[derive(Debug, Default)]
pub struct Environment<'p> {
    bindings: HashMap<String, Number>,
    parent: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    /// Create an empty global environment
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            parent: None,
        }
    }

    /// Create an empty scope nested inside `self`
    pub fn child(&'p self) -> Environment<'p> {
        Environment {
            bindings: HashMap::new(),
            parent: Some(self),
        }
    }

    pub fn parent(&self) -> Option<&'p Environment<'p>> {
        self.parent
    }

    /// Look `name` up through the scope chain
    pub fn get(&self, name: &str) -> Option<&Number> {
        match self.bindings.get(name) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.get(name)),
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding
    pub fn set(&mut self, name: impl Into<String>, value: Number) {
        self.bindings.insert(name.into(), value);
    }

    /// Remove a binding from this scope only
    pub fn remove(&mut self, name: &str) -> Option<Number> {
        self.bindings.remove(name)
    }

    /// Whether `name` is visible from this scope
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of bindings in this scope (parents excluded)
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
