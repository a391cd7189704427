//! Runtime environment: the dynamic scope stack and the function table

mod frame;

pub use frame::ScopeGuard;

use std::sync::Arc;

use indexmap::IndexMap;

use crate::ast::Node;
use crate::context::DEFAULT_MAX_CALL_DEPTH;
use crate::error::{EvalError, Result};

/// A single variable binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The binding's name
    pub name: String,

    /// The bound value
    pub value: i64,
}

/// The runtime environment managing variable scopes and function bodies.
///
/// Uses a flat scope design with frame boundaries: the scope stack is the
/// sequence of frames, and lookups walk the bindings from the most recent
/// one backwards. That walk is the dynamic scoping rule: whatever scope is
/// on the stack at the moment of the lookup is visible, no matter which
/// function or block declared it.
///
/// # Example
///
/// ```
/// use dynscope::Environment;
///
/// let mut env = Environment::new();
/// env.declare_var("x", 1);
///
/// env.push_scope();
/// env.declare_var("x", 10); // Shadows outer x
/// env.declare_var("y", 2);
/// assert_eq!(env.lookup("x"), Ok(10));
///
/// env.pop_scope();
/// assert_eq!(env.lookup("x"), Ok(1));
/// assert!(env.lookup("y").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// All bindings in a flat array (most recent at end)
    bindings: Vec<Binding>,

    /// Frame boundaries (indices into bindings)
    /// Each entry marks where a scope begins
    frames: Vec<usize>,

    /// Registered function bodies, in registration order
    functions: IndexMap<String, Arc<Node>>,

    /// Number of calls currently executing
    call_depth: usize,

    /// Maximum allowed call depth
    max_call_depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a new environment holding only the global scope.
    pub fn new() -> Self {
        Self::with_max_call_depth(DEFAULT_MAX_CALL_DEPTH)
    }

    /// Create an environment with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            bindings: Vec::new(),
            frames: vec![0], // Global scope
            functions: IndexMap::new(),
            call_depth: 0,
            max_call_depth: max_depth,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Scope Management
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a new, empty scope.
    pub fn push_scope(&mut self) {
        self.frames.push(self.bindings.len());
        tracing::trace!(depth = self.frames.len(), "push scope");
    }

    /// Exit the current scope, dropping every binding declared in it.
    ///
    /// Does nothing if only the global scope is left.
    pub fn pop_scope(&mut self) {
        if self.frames.len() > 1 {
            if let Some(boundary) = self.frames.pop() {
                self.bindings.truncate(boundary);
            }
            tracing::trace!(depth = self.frames.len(), "pop scope");
        } else {
            tracing::warn!("attempted to pop the global scope");
        }
    }

    /// Get the current scope depth (number of scopes, global included).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if we're at global scope.
    pub fn is_global_scope(&self) -> bool {
        self.frames.len() == 1
    }

    fn current_frame_start(&self) -> usize {
        self.frames.last().copied().unwrap_or(0)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Variables
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value` in the current scope.
    ///
    /// A binding of the same name in the current scope is overwritten;
    /// bindings in outer scopes are never touched.
    pub fn declare_var(&mut self, name: impl Into<String>, value: i64) {
        let name = name.into();
        let start = self.current_frame_start();

        match self.bindings[start..].iter_mut().find(|b| b.name == name) {
            Some(binding) => binding.value = value,
            None => self.bindings.push(Binding { name, value }),
        }
    }

    /// Resolve `name` against the scope stack, innermost scope first.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedVariable` if no active scope binds `name`.
    pub fn lookup(&self, name: &str) -> Result<i64> {
        self.get(name)
            .ok_or_else(|| EvalError::undefined_variable(name))
    }

    /// Non-failing variant of [`Environment::lookup`].
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings
            .iter()
            .rev()
            .find(|b| b.name == name)
            .map(|b| b.value)
    }

    /// Check if any active scope binds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.iter().any(|b| b.name == name)
    }

    /// Check if the current (innermost) scope binds `name`.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        let start = self.current_frame_start();
        self.bindings[start..].iter().any(|b| b.name == name)
    }

    /// Names bound in the current scope, in declaration order.
    pub fn names_in_current_scope(&self) -> Vec<&str> {
        let start = self.current_frame_start();
        self.bindings[start..]
            .iter()
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Iterate over all bindings, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Get the number of bindings across all scopes.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every variable and scope, back to a bare global scope.
    ///
    /// Registered functions are kept.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.frames = vec![0];
        self.call_depth = 0;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Functions
    // ═══════════════════════════════════════════════════════════════════

    /// Register a function body under `name`, replacing any previous one.
    pub fn register_func(&mut self, name: impl Into<String>, body: impl Into<Arc<Node>>) {
        let name = name.into();
        tracing::debug!(function = %name, "register function");
        self.functions.insert(name, body.into());
    }

    /// Get the body registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedFunction` if nothing was registered under `name`.
    pub fn get_func(&self, name: &str) -> Result<Arc<Node>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::undefined_function(name))
    }

    /// Check if a function is registered under `name`.
    pub fn has_func(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names, in registration order.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Call Depth Tracking
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a function call. Returns error if max depth exceeded.
    pub fn enter_call(&mut self) -> Result<()> {
        if self.call_depth >= self.max_call_depth {
            return Err(EvalError::CallDepthExceeded {
                depth: self.call_depth,
                max: self.max_call_depth,
            });
        }
        self.call_depth += 1;
        Ok(())
    }

    /// Exit a function call.
    pub fn exit_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }

    /// Get current call depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Get the configured call depth limit.
    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }
}
