//! Evaluation context configuration

use crate::environment::Environment;
use crate::output::{stdout_handler, SharedPrintHandler};

/// Default maximum number of nested calls.
///
/// Each nested call costs several host stack frames (dispatch, the call
/// itself, and the `Block`/`If` nodes of its body). 200 levels stay well
/// inside a 2 MiB thread stack in unoptimized builds. Raise it only on
/// threads with a larger stack.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 200;

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls next to the
/// [`Environment`] and controls output, tracing and recursion limits.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum call depth for environments created by [`EvalContext::environment`]
    pub max_call_depth: usize,

    /// Whether to trace every node evaluation (for debugging)
    pub trace: bool,

    /// Where `Print` nodes write their lines
    pub output: SharedPrintHandler,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            trace: false,
            output: stdout_handler(),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Create a context that prints to the given handler.
    pub fn with_output(output: SharedPrintHandler) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    /// Enable or disable per-node tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Create a fresh environment honoring this context's call depth limit.
    pub fn environment(&self) -> Environment {
        Environment::with_max_call_depth(self.max_call_depth)
    }
}
