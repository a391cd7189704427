//! Addition evaluation

use crate::ast::Add;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

impl Evaluate for Add {
    /// Left operand first, then right. Overflow wraps.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let left = self.left.eval(env, ctx)?;
        let right = self.right.eval(env, ctx)?;
        Ok(eval_add(left, right))
    }
}

/// Two's complement addition.
pub fn eval_add(left: i64, right: i64) -> i64 {
    left.wrapping_add(right)
}
