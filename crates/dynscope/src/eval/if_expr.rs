//! If evaluation

use crate::ast::If;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

impl Evaluate for If {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let cond = self.cond.eval(env, ctx)?;

        if cond == 0 {
            // No else branch
            return Ok(0);
        }

        let mut scope = env.scope_guard();
        self.then_branch.eval(&mut scope, ctx)
    }
}
