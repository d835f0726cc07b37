//! Compilation of an [`ASTNode`] into a linear instruction sequence.

use log::debug;

use crate::ast::{ASTNode, Parser};
use crate::bytecode::{Formula, Instruction};
use crate::error::{Error, ParseError};
use crate::limits;

/// Emits post-order instructions off the expression tree and records which
/// variable names the expression references.
///
/// Compilation is all-or-nothing: no [`Formula`] is produced on any failure.
pub struct Compiler {
    instructions: Vec<Instruction>,
    variables: Vec<String>,
}

impl Compiler {
    /// Parses and compiles `expression` into a reusable [`Formula`].
    pub fn compile(expression: &str) -> Result<Formula, Error> {
        let ast = Parser::parse(expression)?;
        let mut compiler = Compiler {
            instructions: Vec::new(),
            variables: Vec::new(),
        };
        compiler.compile_node(&ast)?;
        debug!(
            "compiled {:?} into {} instruction(s), {} variable(s)",
            expression,
            compiler.instructions.len(),
            compiler.variables.len()
        );
        Ok(Formula::new(
            expression.to_string(),
            compiler.instructions,
            compiler.variables,
        ))
    }

    fn emit(&mut self, instruction: Instruction) -> Result<(), ParseError> {
        if self.instructions.len() == limits::MAX_INSTRUCTIONS {
            return Err(ParseError::TooComplex {
                max: limits::MAX_INSTRUCTIONS,
            });
        }
        self.instructions.push(instruction);
        Ok(())
    }

    fn compile_node(&mut self, node: &ASTNode) -> Result<(), ParseError> {
        match node {
            ASTNode::Number(value) => self.emit(Instruction::Push(*value)),

            ASTNode::Variable(name) => {
                if !self.variables.iter().any(|known| known == name) {
                    self.variables.push(name.clone());
                }
                self.emit(Instruction::Load(name.clone()))
            }

            ASTNode::Unary { op, operand } => {
                self.compile_node(operand)?;
                self.emit(Instruction::Unary(*op))
            }

            ASTNode::Binary { left, op, right } => {
                self.compile_node(left)?;
                self.compile_node(right)?;
                self.emit(Instruction::Binary(*op))
            }

            ASTNode::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                // Emission order preserves the eager semantics: condition
                // and both branches are on the stack before Select runs.
                self.compile_node(condition)?;
                self.compile_node(then_branch)?;
                self.compile_node(else_branch)?;
                self.emit(Instruction::Select)
            }

            ASTNode::FunctionCall { name, args } => {
                for arg in args {
                    self.compile_node(arg)?;
                }
                self.emit(Instruction::Call {
                    name: name.clone(),
                    argc: args.len(),
                })
            }
        }
    }
}
