#![warn(clippy::uninlined_format_args)]

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while_m_n},
    character::complete::{char, digit1, satisfy},
    combinator::{all_consuming, not, opt, recognize, value},
    multi::many1,
};

/// Text that follows the slash command, e.g. `/warikan 1,000円`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Amount(u64),
    Join,
    Settle,
    Help,
    Delete(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("command text is empty")]
    Empty,
    #[error("amount '{0}' is too large")]
    AmountOutOfRange(String),
    #[error("payment id is missing")]
    MissingPaymentId,
    #[error("unrecognized argument '{0}'")]
    InvalidArgument(String),
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// 1,000 / 12,345,678
fn grouped_digits(input: &str) -> IResult<&str, &str> {
    recognize((
        take_while_m_n(1, 3, is_digit),
        many1((char(','), take_while_m_n(3, 3, is_digit))),
    ))
    .parse(input)
}

// Only ASCII word characters glue onto a number, so `代1,000円` still holds
// an amount. Separators are excluded too so `1,00`, `1.5` and `-100` are not
// misread as smaller numbers.
fn is_amount_boundary(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || matches!(c, '_' | ',' | '.' | '-'))
}

fn amount_end(input: &str) -> IResult<&str, ()> {
    not(satisfy(|c| !is_amount_boundary(c))).parse(input)
}

fn amount(input: &str) -> IResult<&str, &str> {
    (
        opt(alt((char('¥'), char('￥')))),
        alt((grouped_digits, digit1)),
        alt((
            value((), tag("円")),
            value((), (tag_no_case("yen"), amount_end)),
            amount_end,
        )),
    )
        .map(|(_, digits, _)| digits)
        .parse(input)
}

/// First amount starting at a boundary inside `token`.
fn find_amount(token: &str) -> Option<&str> {
    let mut previous = None;
    for (idx, ch) in token.char_indices() {
        if previous.is_none_or(is_amount_boundary)
            && let Ok((_, digits)) = amount(&token[idx..])
        {
            return Some(digits);
        }
        previous = Some(ch);
    }
    None
}

fn join_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("join"), tag("参加"), tag("払います"), tag("払う"))).parse(input)
}

fn settle_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("settle"), tag("精算"), tag("清算"))).parse(input)
}

fn help_keyword(input: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case("help"),
        tag_no_case("h"),
        tag("ヘルプ"),
        tag("使い方"),
    ))
    .parse(input)
}

fn delete_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("delete"), tag("取り消し"), tag("取消"))).parse(input)
}

fn full_match<'a, P>(parser: P, token: &'a str) -> Option<<P as Parser<&'a str>>::Output>
where
    P: Parser<&'a str, Error = nom::error::Error<&'a str>>,
{
    all_consuming(parser)
        .parse(token)
        .ok()
        .map(|(_, output)| output)
}

fn parse_amount(digits: &str) -> Result<u64, ParseError> {
    digits
        .replace(',', "")
        .parse()
        .map_err(|_| ParseError::AmountOutOfRange(digits.to_string()))
}

/// Parses the command text.
///
/// A leading delete keyword wins, then the first amount anywhere in the text
/// (even glued to Japanese words), then join, settle and help keywords in that
/// order.
pub fn parse_command(input: &str) -> Result<Command<'_>, ParseError> {
    let mut tokens = input.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(ParseError::Empty);
    };

    if full_match(delete_keyword, first).is_some() {
        return tokens
            .next()
            .map(Command::Delete)
            .ok_or(ParseError::MissingPaymentId);
    }

    if let Some(digits) = input.split_whitespace().find_map(find_amount) {
        return parse_amount(digits).map(Command::Amount);
    }

    let any = |keyword: fn(&str) -> IResult<&str, &str>| {
        input
            .split_whitespace()
            .any(|token| full_match(keyword, token).is_some())
    };
    if any(join_keyword) {
        Ok(Command::Join)
    } else if any(settle_keyword) {
        Ok(Command::Settle)
    } else if any(help_keyword) {
        Ok(Command::Help)
    } else {
        Err(ParseError::InvalidArgument(input.trim().to_string()))
    }
}
