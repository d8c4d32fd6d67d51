//! Factorial and gamma function.

use num_bigint::BigInt;
use num_traits::One;

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::util::count_digits;

/// Integer factorials up to this value are computed exactly.
const EXACT_FACTORIAL_MAX: i64 = 10000;

// lo * (lo+1) * ... * hi
fn product(lo: u64, hi: u64) -> BigInt {
    if lo > hi {
        BigInt::one()
    } else if hi - lo < 8 {
        (lo..=hi).fold(BigInt::one(), |acc, v| acc * v)
    } else {
        let m = lo + (hi - lo) / 2;
        product(lo, m) * product(m + 1, hi)
    }
}

impl BigDecimal {
    /// Computes the factorial of a number. The result is rounded using `mc`.
    /// For non-integer numbers the factorial is the gamma function of `self + 1`.
    /// Factorials of small non-negative integers are exact, so unlimited precision is accepted for them.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is a negative integer.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited and `self` is not a small non-negative integer.
    ///  - ExponentOverflow: the result is too large.
    pub fn factorial(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.is_integer() {
            if self.is_negative() {
                return Err(Error::Domain("factorial(x) for negative integer x"));
            }

            let n = self.to_i64().ok_or(Error::ExponentOverflow(Sign::Pos))?;

            if n <= EXACT_FACTORIAL_MAX || mc.is_unlimited() {
                let ret = BigDecimal::from(product(2, n as u64));
                return Ok(ret.round(mc));
            }
        }

        mc.check_finite()?;

        if self.is_negative() {
            // x! = (x+k)! / ((x+1) * (x+2) * ... * (x+k))
            let k = self.neg().integral_part().to_i64().ok_or(Error::ExponentOverflow(Sign::Neg))? + 1;
            let mc_wrk = mc.with_guard(count_digits(k as u64) + 4);

            let shifted = self.add_full_prec(&BigDecimal::from_i64(k));
            let f = shifted.spouge(mc_wrk, cc)?;

            let mut d = ONE.clone();
            for i in 1..=k {
                let xi = self.add_full_prec(&BigDecimal::from_i64(i));
                d = d.mul(&xi, mc_wrk)?;
            }

            return f.div(&d, mc);
        }

        let mc_wrk = mc.with_guard(4);
        let ret = self.spouge(mc_wrk, cc)?;

        Ok(ret.round(mc))
    }

    // Spouge's approximation for x >= 0:
    // x! = (x+a)^(x+1/2) * e^-(x+a) * (c0 + c1/(x+1) + ... + c(a-1)/(x+a-1))
    fn spouge(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        let table = cc.spouge_table(mc.precision())?;
        let mc_t = table.math_context();
        let a = table.a();

        let mut sum = BigDecimal::zero();
        for (k, c) in table.coefficients().iter().enumerate() {
            let t = if k == 0 {
                c.clone()
            } else {
                let xk = self.add_full_prec(&BigDecimal::from_usize(k));
                c.div(&xk, mc_t)?
            };
            sum = sum.add(&t, mc_t)?;
        }

        // the absolute error of the exponent becomes the relative error of the result.
        let xa = self.add_full_prec(&BigDecimal::from_usize(a));
        let mc_e = mc.with_guard(xa.exponent().max(0) as usize + 3);

        let l = xa.ln(mc_e, cc)?;
        let t = l.mul(&self.add_full_prec(&ONE_HALF), mc_e)?;
        let t = t.sub(&xa, mc_e)?;
        let p = t.exp(mc)?;

        p.mul(&sum, mc)
    }

    /// Computes the gamma function of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero or a negative integer.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited and `self` is not a small positive integer.
    ///  - ExponentOverflow: the result is too large.
    pub fn gamma(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.is_integer() && !self.is_positive() {
            return Err(Error::Domain("gamma(x) for non-positive integer x"));
        }

        self.sub_full_prec(&ONE).factorial(mc, cc)
    }
}
