//! Block evaluation

use crate::ast::{Block, Node};
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

impl Evaluate for Block {
    /// Evaluate the children in their own scope, returning the last value.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let mut scope = env.scope_guard();
        eval_children(self.children(), &mut scope, ctx)
    }
}

/// Evaluate nodes in order within the current scope (without managing scope).
///
/// Returns the value of the last node, or `0` if there are none.
///
/// # Errors
///
/// Stops at the first failing node and returns its error.
pub fn eval_children(nodes: &[Node], env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
    let mut last_value = 0;

    for node in nodes {
        last_value = node.eval(env, ctx)?;
    }

    Ok(last_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::buffer_handler;

    #[test]
    fn test_block_returns_last() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        let node = Node::block([Node::literal(1), Node::literal(2), Node::literal(3)]);
        assert_eq!(node.eval(&mut env, &ctx), Ok(3));
    }

    #[test]
    fn test_empty_block_returns_zero() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        assert_eq!(Block::new().eval(&mut env, &ctx), Ok(0));
        assert_eq!(env.depth(), 1);
    }

    #[test]
    fn test_block_scope() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        let node = Node::block([Node::assign("x", Node::literal(42)), Node::access("x")]);
        assert_eq!(node.eval(&mut env, &ctx), Ok(42));
        assert!(env.get("x").is_none());
    }

    #[test]
    fn test_block_stops_at_first_error() {
        let mut env = Environment::new();
        let ctx = EvalContext::with_output(buffer_handler());

        let node = Node::block([
            Node::print(Node::literal(1)),
            Node::access("undefined"),
            Node::print(Node::literal(2)),
        ]);
        assert!(node.eval(&mut env, &ctx).is_err());
        assert_eq!(ctx.output.get_output(), "> 1\n");
        assert_eq!(env.depth(), 1);
    }

    #[test]
    fn test_eval_children_shares_current_scope() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        let nodes = [Node::assign("kept", Node::literal(1)), Node::noop()];
        assert_eq!(eval_children(&nodes, &mut env, &ctx), Ok(0));
        assert_eq!(env.lookup("kept"), Ok(1));
    }
}
