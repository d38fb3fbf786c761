pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the lexer cannot match at all (such as a line break, which the catch-all symbol pattern
/// does not cover) is kept as a [`TokenKind::Symbol`] token, so that the parser reports it instead
/// of silently dropping the rest of the input.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let tokens = tokenize_complete(input);
        let found = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();

        assert_eq!(found, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "5.23 .5 2. 1e-7 3E+2",
            [
                (TokenKind::Number, "5.23"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, ".5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "1e-7"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "3E+2"),
            ],
        );
    }

    #[test]
    fn functions_and_names() {
        compare_tokens(
            "log(b_2, x1)\tsin",
            [
                (TokenKind::Name, "log"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "b_2"),
                (TokenKind::Comma, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x1"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Name, "sin"),
            ],
        );
    }

    #[test]
    fn unexpected_symbols() {
        compare_tokens(
            "x $ X",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "X"),
            ],
        );
    }

    #[test]
    fn line_break_is_kept() {
        let tokens = tokenize_complete("x\n+ 1");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].kind, TokenKind::Symbol);
        assert_eq!(tokens[1].span, 1..2);
    }
}
