//! Runtime scopes.
//!
//! A [`Scope`] maps names to [`Variable`]s and links to its parent.
//! Parents are shared (`Rc`) because closure capture clones a whole
//! lineage while re-using the scopes above it; the structure is a DAG with
//! no cycles, so reference counting is sufficient ownership.

use std::cell::RefCell;
use std::rc::Rc;

use logo2_util::FxHashMap;

use crate::value::Value;

/// A runtime variable binding.
#[derive(Clone, Debug)]
pub struct Variable {
    pub value: Value,
    pub is_const: bool,
}

impl Variable {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            is_const: false,
        }
    }

    pub fn constant(value: Value) -> Self {
        Self {
            value,
            is_const: true,
        }
    }
}

/// Shared handle to a scope.
pub type ScopeRef = Rc<RefCell<Scope>>;

/// Outcome of assigning through the scope chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    Assigned,
    Const,
    Undefined,
}

/// One environment frame.
#[derive(Debug, Default)]
pub struct Scope {
    variables: FxHashMap<String, Variable>,
    parent: Option<ScopeRef>,
}

impl Scope {
    /// A root scope with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Option<ScopeRef>) -> Self {
        Self {
            variables: FxHashMap::default(),
            parent,
        }
    }

    /// Wraps a scope into a shared handle.
    pub fn into_ref(self) -> ScopeRef {
        Rc::new(RefCell::new(self))
    }

    /// Binds a variable in this scope; false if the name already exists
    /// here.
    pub fn add_variable(&mut self, name: impl Into<String>, var: Variable) -> bool {
        use std::collections::hash_map::Entry;
        match self.variables.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(var);
                true
            }
        }
    }

    /// Reads a variable's value, walking the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(var) = self.variables.get(name) {
            return Some(var.value.clone());
        }
        self.parent.as_ref().and_then(|p| p.borrow().get(name))
    }

    /// Replaces a variable's value, walking the parent chain to the
    /// binding.
    pub fn set(&mut self, name: &str, value: Value) -> AssignOutcome {
        if let Some(var) = self.variables.get_mut(name) {
            if var.is_const {
                return AssignOutcome::Const;
            }
            var.value = value;
            return AssignOutcome::Assigned;
        }
        match &self.parent {
            Some(p) => p.borrow_mut().set(name, value),
            None => AssignOutcome::Undefined,
        }
    }

    /// Deep-copies `scope` and its ancestors into a fresh chain whose
    /// topmost ancestor is re-rooted onto `new_parent`.
    ///
    /// Capture at function definition passes `None`; the call re-roots the
    /// captured chain onto the live scope so later globals stay visible.
    pub fn clone_lineage(scope: &ScopeRef, new_parent: Option<ScopeRef>) -> ScopeRef {
        let borrowed = scope.borrow();
        let parent = match &borrowed.parent {
            Some(p) => Some(Self::clone_lineage(p, new_parent)),
            None => new_parent,
        };
        Scope {
            variables: borrowed.variables.clone(),
            parent,
        }
        .into_ref()
    }
}
