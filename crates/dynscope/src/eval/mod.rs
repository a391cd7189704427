//! Node evaluation
//!
//! Every node kind implements [`Evaluate`] in its own module; the
//! [`Node`] impl here is the single dispatcher that routes to them.

pub mod access;
pub mod assign;
pub mod binary;
pub mod block;
pub mod call;
pub mod if_expr;
pub mod literal;
pub mod print;

use crate::ast::Node;
use crate::{Environment, EvalContext, Result};

/// Trait for evaluating AST nodes to integers.
///
/// This is the core abstraction for the tree-walking evaluator.
pub trait Evaluate {
    /// Evaluate this node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Node {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let result = match self {
            Node::Literal(node) => node.eval(env, ctx),
            Node::Access(node) => node.eval(env, ctx),
            Node::Assign(node) => node.eval(env, ctx),
            Node::Print(node) => node.eval(env, ctx),
            Node::Call(node) => node.eval(env, ctx),
            Node::If(node) => node.eval(env, ctx),
            Node::Block(node) => node.eval(env, ctx),
            Node::Add(node) => node.eval(env, ctx),
            Node::NoOp => Ok(0),
        };

        if ctx.trace {
            tracing::trace!(
                kind = self.kind_name(),
                depth = env.depth(),
                result = ?result,
                "eval"
            );
        }

        result
    }
}

impl Node {
    /// Evaluate this tree as a program root.
    ///
    /// Uses a default [`EvalContext`], so `Print` output goes to stdout.
    ///
    /// # Example
    ///
    /// ```
    /// use dynscope::{Environment, Node};
    ///
    /// let mut env = Environment::new();
    /// env.register_func("get_y", Node::access("y"));
    ///
    /// let program = Node::block([
    ///     Node::assign("y", Node::literal(7)),
    ///     Node::call("get_y"),
    /// ]);
    ///
    /// assert_eq!(program.evaluate(&mut env), Ok(7));
    /// ```
    pub fn evaluate(&self, env: &mut Environment) -> Result<i64> {
        self.eval(env, &EvalContext::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a node (convenience wrapper).
pub fn eval_node(node: &Node, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
    node.eval(env, ctx)
}

pub use block::eval_children;
