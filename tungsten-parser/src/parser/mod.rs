pub mod ast;
pub mod binary;
pub mod call;
pub mod error;
pub mod fmt;
pub mod iter;
pub mod literal;
pub mod paren;
pub mod primary;
pub mod token;

use ast::Node;
use error::{Error, kind};
use tungsten_error::ErrorKind;
use super::{tokenizer::{tokenize_complete, Token, TokenKind}, vars::VariableTable};
use std::ops::Range;
use tracing::debug;

/// The default maximum nesting depth of parenthesized expressions, function calls, and powers.
/// It also bounds the depth of the parsed tree, so long chains such as `x+x+...+x` count too.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the enclosing function returns the parsed value. Otherwise, the
/// macro evaluates to the error of the last attempted parsing function.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            let _err = match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                Err(err) => err,
            };
        )+
        _err
    }};
}

/// A high-level parser for infix expressions. This is the type to use to parse an arbitrary
/// piece of source into an expression tree.
///
/// Variable names found while parsing are registered in the [`VariableTable`] the parser borrows.
#[derive(Debug)]
pub struct Parser<'source, 'vars> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The table that variable names are registered in.
    vars: &'vars mut VariableTable,

    /// The current nesting depth.
    depth: usize,

    /// The maximum nesting depth.
    max_depth: usize,
}

impl<'source, 'vars> Parser<'source, 'vars> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str, vars: &'vars mut VariableTable) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            vars,
            depth: 0,
            max_depth: DEFAULT_MAX_NESTING,
        }
    }

    /// Sets the maximum nesting depth the parser accepts.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the variable table that names are registered in.
    pub fn vars_mut(&mut self) -> &mut VariableTable {
        self.vars
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    pub fn skip_whitespace(&mut self) {
        while self.current_token().map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming it.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.skip_whitespace();
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Runs the given parsing function one nesting level deeper. Fails with a fatal
    /// [`kind::TooDeep`] error if that exceeds the maximum nesting depth.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= self.max_depth {
            return Err(self.error_fatal(kind::TooDeep { limit: self.max_depth }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Fails with a fatal [`kind::TooDeep`] error pointing at `span` if a tree of the given depth
    /// is deeper than the maximum depth.
    pub fn check_tree_depth(&self, depth: usize, span: Range<usize>) -> Result<(), Error> {
        if depth > self.max_depth {
            return Err(Error::new_fatal(vec![span], kind::TooDeep { limit: self.max_depth }));
        }
        Ok(())
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_kind() {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error_fatal(kind::UnclosedParenthesis { opening: false })),
            Some(_) => Err(self.error_fatal(kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses the given source into an expression tree, registering every variable name it contains
/// in `vars`.
///
/// The whole source must form a single expression; anything left over is an error.
pub fn parse_expression(source: &str, vars: &mut VariableTable) -> Result<Node, tungsten_error::Error> {
    let mut parser = Parser::new(source, vars);
    match parser.try_parse_full::<Node>() {
        Ok(node) => {
            debug!(source, size = node.size(), "parsed expression");
            Ok(node)
        },
        Err(err) => {
            debug!(source, error = ?err.kind, spans = ?err.spans, "failed to parse expression");
            Err(err.into())
        },
    }
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary operation is left-associative: `a op b op c` is evaluated as
    /// `(a op b) op c`.
    Left,

    /// The binary operation is right-associative: `a op b op c` is evaluated as
    /// `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
///
/// The ordering decides where parentheses are needed when rendering a tree. Division shares its
/// rank with exponentiation, since a fraction is drawn as a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`).
    Factor,

    /// Precedence of division (`/`) and exponentiation (`^`).
    Exp,

    /// Precedence of function calls, such as `sin(x)` or `log(2, x)`.
    Func,
}

impl Precedence {
    /// Returns the numeric rank of the precedence, starting from `0`.
    pub fn rank(self) -> u8 {
        self as u8
    }
}
