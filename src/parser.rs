//! Parser parses decimal numbers represented in plain or scientific format.

use core::str::Chars;
use core::str::FromStr;

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign as IntSign;

use crate::common::util::check_exponent;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::BigDecimal;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: Vec<u8>,
    frac_len: usize,
    e: Exponent,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: Vec::new(),
            frac_len: 0,
            e: 0,
            valid: false,
        }
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns coefficient digits, sign, exponent.
    pub fn raw_parts(&self) -> (&[u8], Sign, Exponent) {
        (&self.digits, self.sign, self.e)
    }
}

/// Parse a decimal literal.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s);
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if let Some('.' | '0'..='9') = ch {
        parse_num(&mut parser_state);
    }

    // anything left, including a second sign, point or exponent marker, is an error.
    if parser_state.cur_char().is_some() {
        parser_state.valid = false;
    }

    parser_state
}

fn parse_num(parser_state: &mut ParserState) {
    let int_len = parse_digits(parser_state);
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        parser_state.frac_len = parse_digits(parser_state);
    }

    if int_len == 0 && parser_state.frac_len == 0 {
        return;
    }

    let mut e: Exponent = 0;
    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        match parse_exp(parser_state) {
            Some(v) => e = v,
            None => return,
        }
    }

    // the exponent of the last digit.
    match e
        .checked_sub(parser_state.frac_len as Exponent)
        .map(check_exponent)
    {
        Some(Ok(e)) => {
            parser_state.e = e;
            parser_state.valid = true;
        }
        _ => parser_state.valid = false,
    }
}

fn parse_digits(parser_state: &mut ParserState) -> usize {
    let mut ch = parser_state.cur_char();
    let mut len = 0;
    while let Some(c) = ch {
        if c.is_ascii_digit() {
            parser_state.digits.push(c as u8 - b'0');
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }
    len
}

fn parse_exp(parser_state: &mut ParserState) -> Option<Exponent> {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut e: Exponent = 0;
    let mut len = 0;
    while let Some(c) = ch {
        if c.is_ascii_digit() {
            e = e.checked_mul(10)?.checked_add((c as u8 - b'0') as Exponent)?;
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if len == 0 {
        None
    } else if neg {
        Some(-e)
    } else {
        Some(e)
    }
}

impl FromStr for BigDecimal {
    type Err = Error;

    /// Parses a decimal literal like `-12.50`, `.5`, `3.`, or `1.5E-7`.
    ///
    /// ## Errors
    ///
    ///  - MalformedInput: the string is not a valid decimal literal, or its exponent is out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ps = parse(s);
        if !ps.is_valid() {
            return Err(Error::MalformedInput);
        }

        let (digits, sign, e) = ps.raw_parts();
        let mag = BigUint::from_radix_be(digits, 10).ok_or(Error::MalformedInput)?;
        let s = if sign.is_negative() {
            IntSign::Minus
        } else {
            IntSign::Plus
        };

        Ok(BigDecimal::new(BigInt::from_biguint(s, mag), e))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    pub fn test_parser() {
        // combinations of possible valid components of a number and expected resulting characteristics.
        let mantissas = ["0.0", "0", ".000", "00.", "00123", "456.", "789.012", ".3456", "0.0078"];
        let expected_mantissas: [&[u8]; 9] = [
            &[0, 0],
            &[0],
            &[0, 0, 0],
            &[0, 0],
            &[0, 0, 1, 2, 3],
            &[4, 5, 6],
            &[7, 8, 9, 0, 1, 2],
            &[3, 4, 5, 6],
            &[0, 0, 0, 7, 8],
        ];
        let expected_exp_shifts = [-1, 0, -3, 0, 0, 0, -3, -4, -4];

        let signs = ["", "+", "-"];
        let expected_signs = [Sign::Pos, Sign::Pos, Sign::Neg];

        let exponents = ["", "e123", "e+345", "e-678", "e901", "E+234", "E-567"];
        let expected_exponents = [0, 123, 345, -678, 901, 234, -567];

        for i in 0..signs.len() {
            for j in 0..mantissas.len() {
                for k in 0..exponents.len() {
                    let numstr = String::from(signs[i]) + mantissas[j] + exponents[k];

                    let ps = parse(&numstr);
                    assert!(ps.is_valid(), "{}", numstr);

                    let (m, s, e) = ps.raw_parts();
                    assert!(s == expected_signs[i]);
                    assert!(m == expected_mantissas[j]);
                    assert!(e == expected_exponents[k] + expected_exp_shifts[j]);
                }
            }
        }
    }

    #[test]
    pub fn test_malformed() {
        let bad = [
            "", "+", "-", ".", "--1", "+-1", "1-", "1.2.3", "1..2", "1e", "1e+", "1e5e5", "1E5E5",
            "e5", ".e5", "1.5x", " 1", "1 ", "0x10", "1e99999999999999999999", "inf", "nan",
            "1e9223372036854775807",
        ];
        for s in bad {
            assert_eq!(s.parse::<BigDecimal>(), Err(Error::MalformedInput), "{}", s);
        }
    }

    #[test]
    pub fn test_from_str() {
        let n: BigDecimal = "1.50".parse().unwrap();
        let (m, e) = n.to_raw_parts();
        assert_eq!(*m, BigInt::from(150));
        assert_eq!(e, -2);

        let n: BigDecimal = "-12.5E+3".parse().unwrap();
        let (m, e) = n.to_raw_parts();
        assert_eq!(*m, BigInt::from(-125));
        assert_eq!(e, 2);

        let n: BigDecimal = "-0.0".parse().unwrap();
        assert!(n.is_zero());

        let n: BigDecimal = "31415926535897932384626433832795028841971693993751".parse().unwrap();
        assert_eq!(n.precision(), 50);
    }
}
