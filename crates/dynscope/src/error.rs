//! Error types for dynscope evaluation

use thiserror::Error;

/// Errors raised while evaluating a tree.
///
/// Every variant is fatal to the expression that raised it and propagates
/// through all enclosing nodes unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// No active scope binds the variable
    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        /// The variable name
        name: String,
    },

    /// No function body is registered under the name
    #[error("undefined function `{name}`")]
    UndefinedFunction {
        /// The function name
        name: String,
    },

    /// Too many nested calls
    #[error("call depth exceeded: depth {depth} reached the limit of {max}")]
    CallDepthExceeded {
        /// Call depth at the point of failure
        depth: usize,
        /// Configured maximum
        max: usize,
    },
}

impl EvalError {
    /// Create an `UndefinedVariable` error.
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        EvalError::UndefinedVariable { name: name.into() }
    }

    /// Create an `UndefinedFunction` error.
    pub fn undefined_function(name: impl Into<String>) -> Self {
        EvalError::UndefinedFunction { name: name.into() }
    }

    /// The unresolved name, for lookup failures.
    pub fn name(&self) -> Option<&str> {
        match self {
            EvalError::UndefinedVariable { name } | EvalError::UndefinedFunction { name } => {
                Some(name)
            }
            EvalError::CallDepthExceeded { .. } => None,
        }
    }
}

/// Result type alias for dynscope operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EvalError::undefined_variable("x").to_string(),
            "undefined variable `x`"
        );
        assert_eq!(
            EvalError::undefined_function("f").to_string(),
            "undefined function `f`"
        );
        assert_eq!(
            EvalError::CallDepthExceeded { depth: 3, max: 3 }.to_string(),
            "call depth exceeded: depth 3 reached the limit of 3"
        );
    }

    #[test]
    fn test_name_accessor() {
        assert_eq!(EvalError::undefined_variable("y").name(), Some("y"));
        assert_eq!(EvalError::undefined_function("g").name(), Some("g"));
        assert_eq!(EvalError::CallDepthExceeded { depth: 1, max: 1 }.name(), None);
    }
}
