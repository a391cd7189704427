//! Literal evaluation

use crate::ast::Literal;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

impl Evaluate for Literal {
    fn eval(&self, _env: &mut Environment, _ctx: &EvalContext) -> Result<i64> {
        Ok(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_returns_value() {
        let mut env = Environment::new();
        let ctx = EvalContext::default();

        assert_eq!(Literal { value: 42 }.eval(&mut env, &ctx), Ok(42));
        assert_eq!(Literal { value: -3 }.eval(&mut env, &ctx), Ok(-3));
        assert!(env.is_empty());
    }
}
