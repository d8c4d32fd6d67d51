//! String conversion of decimal numbers.

use core::fmt::Display;
use core::fmt::Formatter;

use itertools::repeat_n;

use crate::num::BigDecimal;

impl Display for BigDecimal {
    /// Plain notation when the exponent is not positive and the adjusted exponent
    /// is at least -6, scientific notation `d.dddE±n` otherwise.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let (m, e) = self.to_raw_parts();
        let digits = m.magnitude().to_string();
        let sign = if m.sign() == num_bigint::Sign::Minus { "-" } else { "" };
        let adjusted = self.exponent();

        let s: String = if e <= 0 && adjusted >= -6 {
            let point = digits.len() as i64 + e;
            if e == 0 {
                digits
            } else if point > 0 {
                let (int, frac) = digits.split_at(point as usize);
                format!("{}.{}", int, frac)
            } else {
                let zeroes: String = repeat_n('0', (-point) as usize).collect();
                format!("0.{}{}", zeroes, digits)
            }
        } else {
            let (lead, rest) = digits.split_at(1);
            let exp_sign = if adjusted >= 0 { "+" } else { "" };
            if rest.is_empty() {
                format!("{}E{}{}", lead, exp_sign, adjusted)
            } else {
                format!("{}.{}E{}{}", lead, rest, exp_sign, adjusted)
            }
        };

        f.write_str(sign)?;
        f.write_str(&s)
    }
}
