// Lexical helpers shared by the data parsers

use nom::{
    character::complete::multispace0,
    combinator::all_consuming,
    number::complete::double,
    sequence::delimited,
    IResult,
};

/// Wrap a parser so it tolerates surrounding whitespace
pub fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse a floating point literal (e.g. `3`, `-0.5`, `1e3`)
pub fn number_literal(input: &str) -> IResult<&str, f64> {
    double(input)
}

/// Parse a whole token as one finite number, ignoring surrounding whitespace.
pub fn number_token(token: &str) -> Option<f64> {
    match all_consuming(ws(number_literal))(token) {
        Ok((_, value)) if value.is_finite() => Some(value),
        _ => None,
    }
}
