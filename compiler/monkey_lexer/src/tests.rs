use monkey_ir::{Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .map(|Token { kind, literal }| (kind, literal))
        .collect()
}

fn tok(kind: TokenKind, literal: &str) -> (TokenKind, String) {
    (kind, literal.to_string())
}

#[test]
fn lexes_program_text() {
    let source = r#"let five = 5;
let add = fn(x, y) {
  x + y;
};
!-/*5 % 2;
5 < 10 > 5;
if (5 < 10) { return true; } else { return false; }
10 == 10; 10 != 9;
"foo bar"
[1, 2];
{"foo": "bar"}
for (k in xs) { break; skip; }
macro(x, y) { x + y; };
"#;
    use TokenKind::*;
    let expected = vec![
        tok(Let, "let"),
        tok(Ident, "five"),
        tok(Assign, "="),
        tok(Int, "5"),
        tok(Semicolon, ";"),
        tok(Let, "let"),
        tok(Ident, "add"),
        tok(Assign, "="),
        tok(Function, "fn"),
        tok(LParen, "("),
        tok(Ident, "x"),
        tok(Comma, ","),
        tok(Ident, "y"),
        tok(RParen, ")"),
        tok(LBrace, "{"),
        tok(Ident, "x"),
        tok(Plus, "+"),
        tok(Ident, "y"),
        tok(Semicolon, ";"),
        tok(RBrace, "}"),
        tok(Semicolon, ";"),
        tok(Bang, "!"),
        tok(Minus, "-"),
        tok(Slash, "/"),
        tok(Asterisk, "*"),
        tok(Int, "5"),
        tok(Percent, "%"),
        tok(Int, "2"),
        tok(Semicolon, ";"),
        tok(Int, "5"),
        tok(Lt, "<"),
        tok(Int, "10"),
        tok(Gt, ">"),
        tok(Int, "5"),
        tok(Semicolon, ";"),
        tok(If, "if"),
        tok(LParen, "("),
        tok(Int, "5"),
        tok(Lt, "<"),
        tok(Int, "10"),
        tok(RParen, ")"),
        tok(LBrace, "{"),
        tok(Return, "return"),
        tok(True, "true"),
        tok(Semicolon, ";"),
        tok(RBrace, "}"),
        tok(Else, "else"),
        tok(LBrace, "{"),
        tok(Return, "return"),
        tok(False, "false"),
        tok(Semicolon, ";"),
        tok(RBrace, "}"),
        tok(Int, "10"),
        tok(Eq, "=="),
        tok(Int, "10"),
        tok(Semicolon, ";"),
        tok(Int, "10"),
        tok(NotEq, "!="),
        tok(Int, "9"),
        tok(Semicolon, ";"),
        tok(Str, "foo bar"),
        tok(LBracket, "["),
        tok(Int, "1"),
        tok(Comma, ","),
        tok(Int, "2"),
        tok(RBracket, "]"),
        tok(Semicolon, ";"),
        tok(LBrace, "{"),
        tok(Str, "foo"),
        tok(Colon, ":"),
        tok(Str, "bar"),
        tok(RBrace, "}"),
        tok(For, "for"),
        tok(LParen, "("),
        tok(Ident, "k"),
        tok(In, "in"),
        tok(Ident, "xs"),
        tok(RParen, ")"),
        tok(LBrace, "{"),
        tok(Break, "break"),
        tok(Semicolon, ";"),
        tok(Skip, "skip"),
        tok(Semicolon, ";"),
        tok(RBrace, "}"),
        tok(Macro, "macro"),
        tok(LParen, "("),
        tok(Ident, "x"),
        tok(Comma, ","),
        tok(Ident, "y"),
        tok(RParen, ")"),
        tok(LBrace, "{"),
        tok(Ident, "x"),
        tok(Plus, "+"),
        tok(Ident, "y"),
        tok(Semicolon, ";"),
        tok(RBrace, "}"),
        tok(Semicolon, ";"),
        tok(Eof, ""),
    ];

    assert_eq!(kinds_and_literals(source), expected);
}

#[test]
fn compound_assignment_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("x += 1 -= *= /="),
        vec![
            tok(Ident, "x"),
            tok(PlusAssign, "+="),
            tok(Int, "1"),
            tok(MinusAssign, "-="),
            tok(AsteriskAssign, "*="),
            tok(SlashAssign, "/="),
            tok(Eof, ""),
        ]
    );
}

#[test]
fn keywords_need_a_word_boundary() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("fnord letter iffy"),
        vec![
            tok(Ident, "fnord"),
            tok(Ident, "letter"),
            tok(Ident, "iffy"),
            tok(Eof, ""),
        ]
    );
}

#[test]
fn digits_end_an_identifier() {
    assert_eq!(
        kinds_and_literals("x1 my_var"),
        vec![
            tok(TokenKind::Ident, "x"),
            tok(TokenKind::Int, "1"),
            tok(TokenKind::Ident, "my_var"),
            tok(TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn unterminated_string_is_one_bad_token() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals(r#"let s = "hello world;"#),
        vec![
            tok(Let, "let"),
            tok(Ident, "s"),
            tok(Assign, "="),
            tok(BadString, "hello world;"),
            tok(Eof, ""),
        ]
    );
}

#[test]
fn unknown_characters_are_illegal() {
    use TokenKind::*;
    assert_eq!(
        kinds_and_literals("a @ b"),
        vec![tok(Ident, "a"), tok(Illegal, "@"), tok(Ident, "b"), tok(Eof, "")]
    );
}

#[test]
fn eof_repeats_after_end_of_input() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token(), Token::eof());
    assert_eq!(lexer.next_token(), Token::eof());
}

#[test]
fn empty_string_literal() {
    assert_eq!(
        kinds_and_literals(r#""""#),
        vec![tok(TokenKind::Str, ""), tok(TokenKind::Eof, "")]
    );
}

proptest! {
    #[test]
    fn integers_keep_their_digits(n in 0u64..u64::MAX) {
        let text = n.to_string();
        let tokens = lex(&text);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&tokens[0].literal, &text);
    }

    #[test]
    fn string_literals_keep_inner_text(body in "[a-z0-9 +=;]{0,24}") {
        let tokens = lex(&format!("\"{body}\""));
        prop_assert_eq!(tokens[0].kind, TokenKind::Str);
        prop_assert_eq!(&tokens[0].literal, &body);
    }
}
