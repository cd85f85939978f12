//! Lexer for Monkey using logos.
//!
//! [`Lexer`] is a pull-based [`TokenSource`]; [`lex`] collects a whole
//! input into a vector ending in a single `Eof`.

use logos::Logos;
use monkey_ir::{Token, TokenKind, TokenSource};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,
    #[token("for")]
    For,
    #[token("in")]
    In,
    #[token("break")]
    Break,
    #[token("skip")]
    Skip,
    #[token("macro")]
    Macro,

    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    AsteriskAssign,
    #[token("/=")]
    SlashAssign,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // Range is checked by the parser
    #[regex(r"[0-9]+")]
    Int,

    // No escapes; everything up to the next quote
    #[regex(r#""[^"]*""#)]
    Str,

    // Runs to end of input
    #[regex(r#""[^"]*"#)]
    BadString,

    #[regex(r"[a-zA-Z_]+")]
    Ident,
}

/// Streaming lexer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
        }
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            return Token::eof();
        };
        let slice = self.inner.slice();
        match result {
            Ok(raw) => convert_token(raw, slice),
            Err(()) => Token::new(TokenKind::Illegal, slice),
        }
    }
}

/// Lex `source` into a token vector terminated by one `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn convert_token(raw: RawToken, slice: &str) -> Token {
    let kind = match raw {
        RawToken::Str => return Token::new(TokenKind::Str, &slice[1..slice.len() - 1]),
        RawToken::BadString => return Token::new(TokenKind::BadString, &slice[1..]),
        RawToken::Int => TokenKind::Int,
        RawToken::Ident => TokenKind::Ident,

        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,
        RawToken::For => TokenKind::For,
        RawToken::In => TokenKind::In,
        RawToken::Break => TokenKind::Break,
        RawToken::Skip => TokenKind::Skip,
        RawToken::Macro => TokenKind::Macro,

        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::PlusAssign => TokenKind::PlusAssign,
        RawToken::MinusAssign => TokenKind::MinusAssign,
        RawToken::AsteriskAssign => TokenKind::AsteriskAssign,
        RawToken::SlashAssign => TokenKind::SlashAssign,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Token::new(kind, slice)
}

#[cfg(test)]
mod tests;
