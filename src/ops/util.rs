//! Auxiliary items.

use log::trace;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;
use num_traits::Zero;

use crate::common::consts::ONE_HALF;
use crate::common::consts::QUARTER_PI_LOWER_BOUND;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;

// Extra digits of pi used by the argument reduction on top of the integer digits of the argument.
const TRIG_REDUCTION_GUARD: usize = 4;

/// Number of decimal digits in `n`.
pub(crate) fn count_digits(mut n: u64) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

impl BigDecimal {
    /// For a number below 1 returns the number of zeroes after the decimal point before the first significant digit plus one.
    /// Zero and numbers at least 1 give 0.
    pub(crate) fn leading_zeros(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            (-self.exponent()).max(0) as usize
        }
    }

    /// Rounds to the nearest integer, halves away from zero.
    pub(crate) fn nearest_integer(&self) -> Self {
        let half = if self.is_negative() { ONE_HALF.neg() } else { ONE_HALF.clone() };
        self.add_full_prec(&half).integral_part()
    }

    /// Reduces `self` modulo pi/2: `self` = n*pi/2 + r, where |r| does not exceed pi/4 by more than a rounding error.
    /// Returns r rounded using `mc` and n mod 4.
    ///
    /// When `self` is close to a multiple of pi/2 the subtraction cancels leading digits of r.
    /// The reduction is then repeated with pi extended by the number of cancelled digits,
    /// until r keeps the precision of `mc`.
    pub(crate) fn reduce_trig_arg(&self, mc: MathContext, cc: &Consts) -> Result<(Self, u8), Error> {
        if self.abs() <= *QUARTER_PI_LOWER_BOUND {
            return Ok((self.round(mc), 0));
        }

        let ex = self.exponent().max(0) as usize;
        let mut extra = 0;

        loop {
            let p = mc.precision() + ex + extra + TRIG_REDUCTION_GUARD;
            let mc_pi = MathContext::new(p, RoundingMode::HalfEven);
            let half_pi = cc.pi(mc_pi)?.mul_full_prec(&ONE_HALF)?;

            let n = self.div(&half_pi, mc_pi)?.nearest_integer();
            let r = self.sub_full_prec(&n.mul_full_prec(&half_pi)?);

            // |r| < 1, and its absolute error is below 10^(ex + 2 - p).
            let lost = r.leading_zeros();

            if r.is_zero() {
                extra += p;
            } else if lost + 3 > extra + TRIG_REDUCTION_GUARD {
                extra = lost + 3;
            } else {
                return Ok((r.round(mc), quadrant(&n)));
            }

            trace!("trig argument reduction cancelled {} digits, retrying with {} extra digits", lost, extra);
        }
    }

    /// If `self` is small enough for f(x) = x + c*x^order (|c| < 1) to round like a value
    /// infinitesimally moved from `self`, returns f(`self`) rounded using `mc`.
    /// The direction of the move is given by `toward_zero`.
    pub(crate) fn small_arg_round(&self, order: Exponent, toward_zero: bool, mc: MathContext) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let e = self.exponent();
        let k = (self.precision() as Exponent).max(mc.precision() as Exponent + 1);

        // |c*x^order| must stay below 10^(e - k - 1), the digits of `self` and the rounding boundaries
        // around it are multiples of 10^(e - k).
        if (order - 1) * e > -k - 1 - order {
            return None;
        }

        let unit = BigDecimal::new(BigInt::from(self.signum()), e - k - 2);
        let x = if toward_zero { self.sub_full_prec(&unit) } else { self.add_full_prec(&unit) };

        Some(x.round(mc))
    }
}

// n mod 4 for an integer n.
fn quadrant(n: &BigDecimal) -> u8 {
    let (m, e) = n.to_raw_parts();
    let k = match e {
        0 => m.clone(),
        1 => m * BigInt::from(10),
        _ => BigInt::zero(),
    };
    k.mod_floor(&BigInt::from(4)).to_u8().unwrap_or(0)
}

/// Returns pi/2 rounded using `mc`.
pub(crate) fn half_pi(mc: MathContext, cc: &Consts) -> Result<BigDecimal, Error> {
    let pi = cc.pi(mc.with_guard(1))?;
    Ok(pi.mul_full_prec(&ONE_HALF)?.round(mc))
}
