use nom::{
    bytes::complete::{take_till1, take_while1},
    IResult, Parser,
};

use crate::Dialect;

/// One piece of a tokenized path. Tokens borrow from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathToken<'a> {
    /// The drive or root prefix, verbatim (`/`, `C:\`, `\\`).
    Lead(&'a str),
    /// A maximal run of non-separator characters. `""` marks a trailing
    /// separator.
    Component(&'a str),
}

impl<'a> PathToken<'a> {
    pub fn as_str(self) -> &'a str {
        match self {
            PathToken::Lead(lead) => lead,
            PathToken::Component(component) => component,
        }
    }
}

/// At most one [`PathToken::Lead`], always first.
pub type TokenStream<'a> = Vec<PathToken<'a>>;

fn separator_run(input: &str, dialect: Dialect) -> IResult<&str, &str> {
    take_while1(|c: char| dialect.is_separator(c)).parse(input)
}

fn span(input: &str, dialect: Dialect) -> IResult<&str, &str> {
    take_till1(|c: char| dialect.is_separator(c)).parse(input)
}

/// Splits `path` into `[lead] [span] (sep span)* [sep ""]`.
///
/// Every piece of the grammar is optional, so this never fails: runs of
/// separators collapse into one boundary and anything else becomes an
/// ordinary component.
pub fn tokenize(path: &str, dialect: Dialect) -> TokenStream<'_> {
    let mut tokens = Vec::new();
    let mut input = path;

    if let Ok((rest, lead)) = dialect.parse_lead(input) {
        tokens.push(PathToken::Lead(lead));
        input = rest;
    }
    if let Ok((rest, component)) = span(input, dialect) {
        tokens.push(PathToken::Component(component));
        input = rest;
    }
    while let Ok((after_sep, _)) = separator_run(input, dialect) {
        match span(after_sep, dialect) {
            Ok((rest, component)) => {
                tokens.push(PathToken::Component(component));
                input = rest;
            }
            Err(_) => {
                tokens.push(PathToken::Component(""));
                input = after_sep;
                break;
            }
        }
    }
    debug_assert!(input.is_empty(), "unconsumed path input: {input:?}");

    tokens
}
