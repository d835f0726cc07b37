//! Stack-machine execution backend.

use crate::bytecode::{Formula, Instruction};
use crate::context::Context;
use crate::error::EvalError;
use crate::limits;

/// Executes a compiled [`Formula`] against an explicit operand stack.
///
/// The stack is local to a single [`run`](Executor::run) call, so a formula
/// may be executed concurrently as long as each thread brings its own
/// [`Context`].
pub(crate) struct Executor<'ctx> {
    stack: Vec<f64>,
    context: &'ctx Context,
}

impl<'ctx> Executor<'ctx> {
    pub fn new(context: &'ctx Context) -> Self {
        Self {
            stack: Vec::with_capacity(limits::MAX_STACK),
            context,
        }
    }

    pub fn run(&mut self, formula: &Formula) -> Result<f64, EvalError> {
        for instruction in formula.instructions() {
            match instruction {
                Instruction::Push(value) => self.push(*value)?,

                Instruction::Load(name) => {
                    let value = self.context.lookup(name)?;
                    self.push(value)?;
                }

                Instruction::Binary(op) => {
                    let right = self.pop()?;
                    let left = self.pop()?;
                    let value = op.apply(left, right)?;
                    self.push(value)?;
                }

                Instruction::Unary(op) => {
                    let value = op.apply(self.pop()?);
                    self.push(value)?;
                }

                Instruction::Select => {
                    let else_value = self.pop()?;
                    let then_value = self.pop()?;
                    let condition = self.pop()?;
                    self.push(if condition != 0.0 {
                        then_value
                    } else {
                        else_value
                    })?;
                }

                Instruction::Call { name, argc } => {
                    if self.stack.len() < *argc {
                        return Err(EvalError::StackUnderflow);
                    }
                    let args = self.stack.split_off(self.stack.len() - argc);
                    let value = self.context.call_function(name, &args)?;
                    self.push(value)?;
                }
            }
        }

        // A well-formed instruction sequence leaves exactly the result.
        if self.stack.len() != 1 {
            return Err(EvalError::InvalidStack);
        }
        self.stack.pop().ok_or(EvalError::InvalidStack)
    }

    fn push(&mut self, value: f64) -> Result<(), EvalError> {
        if self.stack.len() == limits::MAX_STACK {
            return Err(EvalError::StackOverflow);
        }
        self.stack.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<f64, EvalError> {
        self.stack.pop().ok_or(EvalError::StackUnderflow)
    }
}
