//! Function call evaluation

use crate::ast::Call;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

impl Evaluate for Call {
    /// Evaluate the registered body in a fresh scope on top of the
    /// caller's scopes.
    ///
    /// The body sees every caller binding still on the stack and may
    /// shadow it; its own bindings vanish when the call returns. The
    /// function is resolved before the scope is pushed.
    #[tracing::instrument(level = "debug", skip(self, env, ctx), fields(function = %self.name))]
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let body = env.get_func(&self.name)?;

        env.enter_call()?;
        tracing::debug!(call_depth = env.call_depth(), "enter");

        let result = {
            let mut scope = env.scope_guard();
            body.eval(&mut scope, ctx)
        };

        env.exit_call();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use crate::EvalError;

    #[test]
    fn test_call_returns_body_result() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();
        env.register_func("five", Node::literal(5));

        assert_eq!(Node::call("five").eval(&mut env, &ctx), Ok(5));
        assert_eq!(env.depth(), 1);
        assert_eq!(env.call_depth(), 0);
    }

    #[test]
    fn test_call_locals_are_dropped() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();
        env.register_func("set_local", Node::assign("local", Node::literal(3)));

        assert_eq!(Node::call("set_local").eval(&mut env, &ctx), Ok(3));
        assert!(!env.contains("local"));
    }

    #[test]
    fn test_call_undefined_function() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        assert_eq!(
            Node::call("missing").eval(&mut env, &ctx),
            Err(EvalError::undefined_function("missing"))
        );
        assert_eq!(env.depth(), 1);
        assert_eq!(env.call_depth(), 0);
    }

    #[test]
    fn test_call_failure_in_body_restores_depth() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();
        env.register_func("bad", Node::access("nothing"));
        env.push_scope();

        assert!(Node::call("bad").eval(&mut env, &ctx).is_err());
        assert_eq!(env.depth(), 2);
        assert_eq!(env.call_depth(), 0);
    }

    #[test]
    fn test_call_depth_limit() {
        let mut env = Environment::with_max_call_depth(8);
        let ctx = EvalContext::default();
        env.register_func("forever", Node::call("forever"));

        assert_eq!(
            Node::call("forever").eval(&mut env, &ctx),
            Err(EvalError::CallDepthExceeded { depth: 8, max: 8 })
        );
        assert_eq!(env.depth(), 1);
        assert_eq!(env.call_depth(), 0);
    }
}
