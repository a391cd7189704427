//! RAII scope guard for automatic scope cleanup

use super::Environment;

/// RAII guard that automatically pops a scope when dropped.
///
/// Evaluators that push a scope hold one of these so that the scope is
/// popped on every exit path, including an error propagated with `?`.
///
/// # Example
///
/// ```
/// use dynscope::Environment;
///
/// let mut env = Environment::new();
/// env.declare_var("x", 1);
///
/// {
///     let mut guard = env.scope_guard();
///     guard.declare_var("y", 2);
///     assert!(guard.contains("y"));
/// }
/// // guard dropped, scope popped, y is gone
/// assert!(!env.contains("y"));
/// assert!(env.contains("x"));
/// ```
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Environment {
    /// Create a scope guard that pushes a scope now and pops it on drop.
    pub fn scope_guard(&mut self) -> ScopeGuard<'_> {
        self.push_scope();
        ScopeGuard { env: self }
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        self.env.pop_scope();
    }
}

impl<'a> std::ops::Deref for ScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}
