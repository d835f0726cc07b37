//! Tree-walking evaluation backend.

use crate::ast::ASTNode;
use crate::context::Context;
use crate::error::EvalError;

/// Evaluates an [`ASTNode`] directly, resolving variables and function
/// calls through a [`Context`].
///
/// Evaluation is eager throughout: `&&`, `||`, and `?:` evaluate every
/// operand/branch before selecting a result, so an error anywhere in the
/// expression surfaces regardless of which branch "wins".
pub(crate) struct Evaluator<'ctx> {
    context: &'ctx Context,
}

impl<'ctx> Evaluator<'ctx> {
    pub fn new(context: &'ctx Context) -> Self {
        Self { context }
    }

    pub fn evaluate(&self, node: &ASTNode) -> Result<f64, EvalError> {
        match node {
            ASTNode::Number(value) => Ok(*value),

            ASTNode::Variable(name) => self.context.lookup(name),

            ASTNode::Unary { op, operand } => Ok(op.apply(self.evaluate(operand)?)),

            ASTNode::Binary { left, op, right } => {
                let left_value = self.evaluate(left)?;
                let right_value = self.evaluate(right)?;
                op.apply(left_value, right_value)
            }

            ASTNode::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                // Both branches evaluate before the condition selects one.
                let condition_value = self.evaluate(condition)?;
                let then_value = self.evaluate(then_branch)?;
                let else_value = self.evaluate(else_branch)?;
                Ok(if condition_value != 0.0 {
                    then_value
                } else {
                    else_value
                })
            }

            ASTNode::FunctionCall { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<f64>, EvalError>>()?;
                self.context.call_function(name, &values)
            }
        }
    }
}
