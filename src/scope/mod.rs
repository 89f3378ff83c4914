// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::ast::{Value, Variable};
use crate::XxmlError;

mod access;
mod conversion;

pub use conversion::FromValue;

/// A node of the parsed settings tree.
///
/// Children hang off a scope two ways: named namespaces (`[<Name> ... ]`) live in
/// the namespace map, while anonymous objects (`Name = { ... }`) live inside a
/// variable's [`Value::Scope`]. Dotted paths walk both uniformly.
///
/// The tree is built once by the parser and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scope {
    variables: IndexMap<String, Variable>,
    namespaces: IndexMap<String, Scope>,
}

/// The target of a successful path lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    /// The path named a namespace.
    Namespace(&'a Scope),
    /// The path named a variable; this may itself be an object scope.
    Value(&'a Value),
}

impl<'a> Resolved<'a> {
    /// An owned copy of the target, with namespaces wrapped as [`Value::Scope`].
    pub fn to_value(&self) -> Value {
        match *self {
            Resolved::Namespace(scope) => Value::Scope(scope.clone()),
            Resolved::Value(value) => value.clone(),
        }
    }

    /// The scope reached by the path, whichever route led to it.
    pub fn as_scope(&self) -> Option<&'a Scope> {
        match *self {
            Resolved::Namespace(scope) => Some(scope),
            Resolved::Value(value) => value.as_scope(),
        }
    }
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a variable, replacing any earlier one with the same name.
    pub(crate) fn set_variable(&mut self, name: String, value: Value) {
        let variable = Variable::new(name.clone(), value);
        self.variables.insert(name, variable);
    }

    /// Register a child namespace, replacing any earlier one with the same name.
    pub(crate) fn insert_namespace(&mut self, name: String, scope: Scope) {
        self.namespaces.insert(name, scope);
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn namespace(&self, name: &str) -> Option<&Scope> {
        self.namespaces.get(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = (&str, &Scope)> {
        self.namespaces.iter().map(|(name, scope)| (name.as_str(), scope))
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.namespaces.is_empty()
    }

    /// Whether `path` resolves to anything. Never fails.
    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Resolve a dotted path without copying.
    ///
    /// Each segment is tried against the namespace map first, then the variable
    /// map. Only a variable holding an object can be descended through.
    pub fn lookup(&self, path: &str) -> Option<Resolved<'_>> {
        let segments: Vec<&str> = path.split('.').collect();
        self.resolve(&segments)
    }

    fn resolve(&self, segments: &[&str]) -> Option<Resolved<'_>> {
        let (key, rest) = segments.split_first()?;

        if let Some(namespace) = self.namespaces.get(*key) {
            return if rest.is_empty() {
                Some(Resolved::Namespace(namespace))
            } else {
                namespace.resolve(rest)
            };
        }

        let variable = self.variables.get(*key)?;
        if rest.is_empty() {
            return Some(Resolved::Value(variable.value()));
        }

        match variable.value() {
            Value::Scope(object) => object.resolve(rest),
            _ => None,
        }
    }
}
