//! Variable access evaluation

use crate::ast::Access;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

impl Evaluate for Access {
    fn eval(&self, env: &mut Environment, _ctx: &EvalContext) -> Result<i64> {
        env.lookup(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalError;

    #[test]
    fn test_access_reads_innermost_binding() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();
        env.declare_var("x", 1);
        env.push_scope();
        env.declare_var("x", 2);

        let access = Access {
            name: "x".to_string(),
        };
        assert_eq!(access.eval(&mut env, &ctx), Ok(2));

        env.pop_scope();
        assert_eq!(access.eval(&mut env, &ctx), Ok(1));
    }

    #[test]
    fn test_access_undefined() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        let access = Access {
            name: "nope".to_string(),
        };
        assert_eq!(
            access.eval(&mut env, &ctx),
            Err(EvalError::undefined_variable("nope"))
        );
    }
}
