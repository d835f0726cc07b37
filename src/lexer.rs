//! Tokenization of formula source text.
//!
//! The lexer recognizes numbers (integer, decimal, and exponent forms),
//! identifiers, the operators and punctuation of the expression grammar, and
//! nothing else. Lexing stops at the first offending character.

use logos::Logos;

use crate::error::ParseError;
use crate::limits;

/// Internal lexing failure, mapped to [`ParseError`] by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexError {
    #[default]
    Unexpected,
    MalformedNumber,
}

/// A minimal meaningful unit of formula source text.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal: `123`, `3.14`, `.5`, `1e10`, `1.5e-3`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", number)]
    Number(f64),
    /// Variable or function name. Names longer than
    /// [`limits::MAX_NAME_LEN`] are silently truncated.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", ident)]
    Ident(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqEq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEq,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEq,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
}

fn number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::MalformedNumber)
}

fn ident(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    // The regex only matches ASCII, so byte truncation is char-safe.
    slice[..slice.len().min(limits::MAX_NAME_LEN)].to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{value}"),
            Token::Ident(name) => write!(f, "{name}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Caret => write!(f, "^"),
            Token::Bang => write!(f, "!"),
            Token::EqEq => write!(f, "=="),
            Token::NotEq => write!(f, "!="),
            Token::Less => write!(f, "<"),
            Token::LessEq => write!(f, "<="),
            Token::Greater => write!(f, ">"),
            Token::GreaterEq => write!(f, ">="),
            Token::AndAnd => write!(f, "&&"),
            Token::OrOr => write!(f, "||"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Question => write!(f, "?"),
            Token::Colon => write!(f, ":"),
        }
    }
}

/// Tokenizes a full expression, stopping at the first lexical error.
///
/// A lone `=`, `&`, or `|` gets a dedicated diagnostic: those constructs are
/// intentionally unsupported to avoid confusion with assignment and bitwise
/// operators.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push(token),
            Err(LexError::MalformedNumber) => return Err(ParseError::MalformedNumber),
            Err(LexError::Unexpected) => {
                let offending = source[span].chars().next().unwrap_or('\0');
                return Err(match offending {
                    '=' | '&' | '|' => ParseError::LoneOperator(offending),
                    other => ParseError::UnexpectedChar(other),
                });
            }
        }
    }
    Ok(tokens)
}
