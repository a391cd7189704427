//! Print evaluation

use crate::ast::Print;
use crate::{Environment, EvalContext, Result};

use super::Evaluate;

/// Marker written before every printed value.
pub const PRINT_MARKER: &str = ">";

impl Evaluate for Print {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<i64> {
        let value = self.expr.eval(env, ctx)?;
        ctx.output.println(&format_output(value));
        Ok(value)
    }
}

/// Format a printed value as one output line (without the newline).
pub fn format_output(value: i64) -> String {
    format!("{PRINT_MARKER} {value}")
}
