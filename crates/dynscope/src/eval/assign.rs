//! Assignment evaluation

use crate::ast::Assign;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

/// The value expression is evaluated first, side effects included, and
/// the result is bound in the current scope.
impl Evaluate for Assign {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let value = self.expr.eval(env, ctx)?;
        env.declare_var(self.name.as_str(), value);
        Ok(value)
    }
}
