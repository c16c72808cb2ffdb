use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{digit1, hex_digit1},
    combinator::{all_consuming, map_res},
    sequence::preceded,
    IResult,
};
use num_traits::Num;

use crate::error::ConfigError;

// -------------------------------------------------------------------------------------------------

fn number<T: Num>(input: &str) -> IResult<&str, T> {
    let hex = map_res(preceded(tag_no_case("0x"), hex_digit1), |digits: &str| T::from_str_radix(digits, 16));
    let dec = map_res(digit1, |digits: &str| T::from_str_radix(digits, 10));
    alt((hex, dec))(input)
}

/// Parses `0x`-prefixed hexadecimal or plain decimal, ignoring surrounding whitespace.
pub fn parse_number<T: Num>(text: &str) -> Result<T, ConfigError> {
    all_consuming(number::<T>)(text.trim())
        .map(|(_, value)| value)
        .map_err(|_| ConfigError::InvalidNumber(text.to_owned()))
}

pub fn parse_address(text: &str) -> Result<u16, ConfigError> {
    parse_number(text)
}

pub fn parse_byte(text: &str) -> Result<u8, ConfigError> {
    parse_number(text)
}

// -------------------------------------------------------------------------------------------------
