//! # dynscope
//!
//! A tree-walking evaluator for a small imperative integer language with
//! dynamic scoping.
//!
//! Variable lookup resolves against the scope stack active when the lookup
//! runs, not against where the variable was written: a function called
//! from a block sees the block's variables, and may shadow them for its
//! own callees.
//!
//! ## Architecture
//!
//! - **Environment**: scope stack plus a flat table of function bodies
//! - **AST**: a closed set of node kinds built directly by a front end
//! - **Evaluator**: one [`Evaluate`] impl per node kind, threading an
//!   [`EvalContext`] for output and configuration
//!
//! ## Example
//!
//! ```
//! use dynscope::{buffer_handler, Environment, EvalContext, Evaluate, Node};
//!
//! let ctx = EvalContext::with_output(buffer_handler());
//! let mut env = ctx.environment();
//! env.register_func("show_x", Node::print(Node::access("x")));
//!
//! let program = Node::block([
//!     Node::assign("x", Node::literal(1)),
//!     Node::block([Node::assign("x", Node::literal(2)), Node::call("show_x")]),
//!     Node::call("show_x"),
//! ]);
//!
//! assert_eq!(program.eval(&mut env, &ctx), Ok(1));
//! assert_eq!(ctx.output.get_output(), "> 2\n> 1\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod output;

// Re-export main types
pub use ast::{Access, Add, Assign, Block, Call, If, Literal, Node, Print};
pub use context::EvalContext;
pub use environment::{Binding, Environment, ScopeGuard};
pub use error::{EvalError, Result};
pub use eval::{eval_children, eval_node, Evaluate};
pub use output::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};

/// dynscope version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
