use std::ops::Range;
use super::{
    error::{kind, Error},
    token::{Name, Number},
    Parse,
    Parser,
};

/// A number literal, such as `2`, `.5`, or `1.5e-3`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let num = input.try_parse::<Number>()?;
        let value = num.lexeme
            .parse()
            .map_err(|_| Error::new_fatal(vec![num.span.clone()], kind::InvalidNumber))?;
        Ok(Self {
            value,
            span: num.span,
        })
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables and function names.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}
