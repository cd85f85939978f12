//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope in a chain. Handles are shared:
//! every closure created in a scope holds that scope, and a later `let` in it
//! is visible through all of them. Closures that capture their own scope form
//! reference cycles, which are never collected.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Single-threaded shared cell. All scope allocation goes through
/// [`LocalScope::new`].
#[repr(transparent)]
struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Environment>,
}

/// Handle to a scope and, through it, all enclosing scopes.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// An empty outermost scope.
    pub fn new() -> Self {
        Self::with_parent(None)
    }

    /// A new empty scope nested inside `parent`.
    pub fn enclosed(parent: &Environment) -> Self {
        Self::with_parent(Some(parent.clone()))
    }

    fn with_parent(parent: Option<Environment>) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: FxHashMap::default(),
            parent,
        }))
    }

    /// Look `name` up, innermost scope first.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut env = self.clone();
        loop {
            let parent = {
                let scope = env.0.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            };
            env = parent?;
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outward() {
        let outer = Environment::new();
        outer.set("x", Value::Integer(1));
        let inner = Environment::enclosed(&outer);

        assert_eq!(inner.get("x"), Some(Value::Integer(1)));
        assert_eq!(inner.get("y"), None);
    }

    #[test]
    fn set_shadows_in_innermost_scope() {
        let outer = Environment::new();
        outer.set("x", Value::Integer(1));
        let inner = Environment::enclosed(&outer);
        inner.set("x", Value::Integer(2));

        assert_eq!(inner.get("x"), Some(Value::Integer(2)));
        assert_eq!(outer.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn handles_share_the_scope() {
        let env = Environment::new();
        let alias = env.clone();
        let child = Environment::enclosed(&env);

        alias.set("late", Value::Boolean(true));

        assert_eq!(env.get("late"), Some(Value::Boolean(true)));
        assert_eq!(child.get("late"), Some(Value::Boolean(true)));
    }
}
