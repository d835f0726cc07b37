//! Recursive-descent parser for the formula grammar.
//!
//! One function per precedence tier, lowest to highest:
//!
//! ```text
//! expression = ternary
//! ternary    = or ("?" expression ":" expression)?
//! or         = and ("||" and)*
//! and        = equality ("&&" equality)*
//! equality   = comparison (("==" | "!=") comparison)*
//! comparison = additive (("<" | "<=" | ">" | ">=") additive)*
//! additive   = multiplicative (("+" | "-") multiplicative)*
//! multiplicative = unary (("*" | "/" | "%") unary)*
//! unary      = ("!" | "-" | "+") unary | power
//! power      = primary ("^" unary)?
//! primary    = NUMBER | IDENT | IDENT "(" (expression ("," expression)*)? ")"
//!            | "(" expression ")"
//! ```
//!
//! `^` is right-associative (its exponent is a unary production); every
//! other binary operator is left-associative.

use log::debug;

use crate::ast::{ASTNode, BinaryOp, UnaryOp};
use crate::error::ParseError;
use crate::lexer::{tokenize, Token};
use crate::limits;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Parses a complete expression. Trailing tokens are an error.
    pub fn parse(expression: &str) -> Result<ASTNode, ParseError> {
        if expression.len() > limits::MAX_EXPRESSION_LEN {
            return Err(ParseError::ExpressionTooLong {
                len: expression.len(),
                max: limits::MAX_EXPRESSION_LEN,
            });
        }
        debug!("parsing expression: {expression}");
        let tokens = tokenize(expression)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            depth: 0,
        };
        let node = parser.parse_expression()?;
        if let Some(trailing) = parser.peek() {
            return Err(ParseError::UnexpectedToken(trailing.to_string()));
        }
        Ok(node)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it equals `expected`.
    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > limits::MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeeplyNested {
                max: limits::MAX_NESTING_DEPTH,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_expression(&mut self) -> Result<ASTNode, ParseError> {
        self.enter()?;
        let node = self.parse_ternary();
        self.leave();
        node
    }

    fn parse_ternary(&mut self) -> Result<ASTNode, ParseError> {
        let condition = self.parse_or()?;
        if !self.eat(&Token::Question) {
            return Ok(condition);
        }
        let then_branch = self.parse_expression()?;
        if !self.eat(&Token::Colon) {
            return Err(ParseError::MissingColon);
        }
        let else_branch = self.parse_expression()?;
        Ok(ASTNode::Ternary {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    fn parse_or(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_and()?;
        while self.eat(&Token::OrOr) {
            let right = self.parse_and()?;
            node = binary(node, BinaryOp::Or, right);
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_equality()?;
        while self.eat(&Token::AndAnd) {
            let right = self.parse_equality()?;
            node = binary(node, BinaryOp::And, right);
        }
        Ok(node)
    }

    fn parse_equality(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_comparison()?;
        loop {
            let op = match self.peek() {
                Some(Token::EqEq) => BinaryOp::Equal,
                Some(Token::NotEq) => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_comparison()?;
            node = binary(node, op, right);
        }
        Ok(node)
    }

    fn parse_comparison(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_additive()?;
        loop {
            let op = match self.peek() {
                Some(Token::Less) => BinaryOp::Less,
                Some(Token::LessEq) => BinaryOp::LessEqual,
                Some(Token::Greater) => BinaryOp::Greater,
                Some(Token::GreaterEq) => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            node = binary(node, op, right);
        }
        Ok(node)
    }

    fn parse_additive(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            node = binary(node, op, right);
        }
        Ok(node)
    }

    fn parse_multiplicative(&mut self) -> Result<ASTNode, ParseError> {
        let mut node = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Multiply,
                Some(Token::Slash) => BinaryOp::Divide,
                Some(Token::Percent) => BinaryOp::Modulo,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            node = binary(node, op, right);
        }
        Ok(node)
    }

    fn parse_unary(&mut self) -> Result<ASTNode, ParseError> {
        let op = match self.peek() {
            Some(Token::Bang) => Some(UnaryOp::Not),
            Some(Token::Minus) => Some(UnaryOp::Negate),
            // Unary plus is accepted and ignored.
            Some(Token::Plus) => None,
            _ => return self.parse_power(),
        };
        self.advance();
        self.enter()?;
        let operand = self.parse_unary();
        self.leave();
        let operand = operand?;
        Ok(match op {
            Some(op) => ASTNode::Unary {
                op,
                operand: Box::new(operand),
            },
            None => operand,
        })
    }

    fn parse_power(&mut self) -> Result<ASTNode, ParseError> {
        let base = self.parse_primary()?;
        if self.eat(&Token::Caret) {
            // The exponent is a unary production, so `2^-3` works and
            // `2^3^2` groups as `2^(3^2)`.
            let exponent = self.parse_unary()?;
            return Ok(binary(base, BinaryOp::Power, exponent));
        }
        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<ASTNode, ParseError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(ASTNode::Number(value)),
            Some(Token::Ident(name)) => {
                if self.eat(&Token::LParen) {
                    let args = self.parse_call_args(&name)?;
                    Ok(ASTNode::FunctionCall { name, args })
                } else {
                    Ok(ASTNode::Variable(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.parse_expression()?;
                if !self.eat(&Token::RParen) {
                    return Err(ParseError::MissingClosingParen);
                }
                Ok(inner)
            }
            Some(token) => Err(ParseError::UnexpectedToken(token.to_string())),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Parses `(expr, expr, ...)` after the opening paren was consumed.
    fn parse_call_args(&mut self, name: &str) -> Result<Vec<ASTNode>, ParseError> {
        let mut args = Vec::new();
        if self.eat(&Token::RParen) {
            return Ok(args);
        }
        loop {
            if args.len() == limits::MAX_CALL_ARGS {
                return Err(ParseError::TooManyArguments {
                    name: name.to_string(),
                    max: limits::MAX_CALL_ARGS,
                });
            }
            args.push(self.parse_expression()?);
            if self.eat(&Token::Comma) {
                continue;
            }
            if self.eat(&Token::RParen) {
                return Ok(args);
            }
            return Err(match self.peek() {
                Some(token) => ParseError::UnexpectedToken(token.to_string()),
                None => ParseError::MissingClosingParen,
            });
        }
    }
}

fn binary(left: ASTNode, op: BinaryOp, right: ASTNode) -> ASTNode {
    ASTNode::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_precedence() {
        // 2 + 3 * 4 groups the multiplication first.
        let node = Parser::parse("2 + 3 * 4").unwrap();
        assert_eq!(
            node,
            binary(
                ASTNode::Number(2.0),
                BinaryOp::Add,
                binary(ASTNode::Number(3.0), BinaryOp::Multiply, ASTNode::Number(4.0)),
            )
        );
    }

    #[test]
    fn test_parse_power_is_right_associative() {
        let node = Parser::parse("2^3^2").unwrap();
        assert_eq!(
            node,
            binary(
                ASTNode::Number(2.0),
                BinaryOp::Power,
                binary(ASTNode::Number(3.0), BinaryOp::Power, ASTNode::Number(2.0)),
            )
        );
    }

    #[test]
    fn test_parse_subtraction_is_left_associative() {
        let node = Parser::parse("1-2-3").unwrap();
        assert_eq!(
            node,
            binary(
                binary(ASTNode::Number(1.0), BinaryOp::Subtract, ASTNode::Number(2.0)),
                BinaryOp::Subtract,
                ASTNode::Number(3.0),
            )
        );
    }

    #[test]
    fn test_parse_unary_binds_below_power() {
        // -2^2 is -(2^2), and 2^-3 parses through the unary exponent.
        let node = Parser::parse("-2^2").unwrap();
        assert_eq!(
            node,
            ASTNode::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(binary(
                    ASTNode::Number(2.0),
                    BinaryOp::Power,
                    ASTNode::Number(2.0),
                )),
            }
        );
        assert!(Parser::parse("2^-3").is_ok());
    }

    #[test]
    fn test_parse_function_call() {
        let node = Parser::parse("clamp(x, 0, 10)").unwrap();
        assert_eq!(
            node,
            ASTNode::FunctionCall {
                name: "clamp".to_string(),
                args: vec![
                    ASTNode::Variable("x".to_string()),
                    ASTNode::Number(0.0),
                    ASTNode::Number(10.0),
                ],
            }
        );
        assert_eq!(
            Parser::parse("now()").unwrap(),
            ASTNode::FunctionCall {
                name: "now".to_string(),
                args: vec![],
            }
        );
    }

    #[test]
    fn test_parse_ternary() {
        let node = Parser::parse("x > 1 ? 2 : 3").unwrap();
        match node {
            ASTNode::Ternary { .. } => {}
            other => panic!("expected ternary, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_colon() {
        assert_eq!(Parser::parse("1 ? 2"), Err(ParseError::MissingColon));
    }

    #[test]
    fn test_parse_missing_closing_paren() {
        assert_eq!(
            Parser::parse("(1 + 2"),
            Err(ParseError::MissingClosingParen)
        );
        assert_eq!(
            Parser::parse("max(1, 2"),
            Err(ParseError::MissingClosingParen)
        );
    }

    #[test]
    fn test_parse_trailing_tokens() {
        assert_eq!(
            Parser::parse("1 + 2 3"),
            Err(ParseError::UnexpectedToken("3".to_string()))
        );
    }

    #[test]
    fn test_parse_incomplete_expression() {
        assert_eq!(Parser::parse("1 +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(Parser::parse(""), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_parse_too_many_call_arguments() {
        let args = vec!["1"; limits::MAX_CALL_ARGS + 1].join(",");
        assert_eq!(
            Parser::parse(&format!("max({args})")),
            Err(ParseError::TooManyArguments {
                name: "max".to_string(),
                max: limits::MAX_CALL_ARGS,
            })
        );
    }

    #[test]
    fn test_parse_nesting_limit() {
        let deep = format!("{}1{}", "(".repeat(70), ")".repeat(70));
        assert_eq!(
            Parser::parse(&deep),
            Err(ParseError::TooDeeplyNested {
                max: limits::MAX_NESTING_DEPTH,
            })
        );
        let fine = format!("{}1{}", "(".repeat(30), ")".repeat(30));
        assert!(Parser::parse(&fine).is_ok());
    }

    #[test]
    fn test_parse_expression_length_limit() {
        let long = "1+".repeat(limits::MAX_EXPRESSION_LEN) + "1";
        assert!(matches!(
            Parser::parse(&long),
            Err(ParseError::ExpressionTooLong { .. })
        ));
    }
}
