//! Arctangent and arccotangent.

use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::util::half_pi;

impl BigDecimal {
    /// Computes the arctangent of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn atan(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        let mc_wrk = mc.with_guard(6);
        let x = self.abs();

        let ret = if x > *ONE {
            // atan(x) = pi/2 - atan(1/x)
            let r = ONE.div(&x, mc_wrk)?;
            half_pi(mc_wrk, cc)?.sub(&r.atan_reduced(mc_wrk)?, mc_wrk)?
        } else {
            x.atan_reduced(mc_wrk)?
        };

        let ret = if self.is_negative() { ret.neg() } else { ret };

        Ok(ret.round(mc))
    }

    // atan(x) = asin(x / sqrt(1 + x^2)), 0 < x <= 1
    fn atan_reduced(&self, mc: MathContext) -> Result<Self, Error> {
        let t = ONE.add_full_prec(&self.mul_full_prec(self)?);
        let s = t.sqrt(mc)?;
        self.div(&s, mc)?.asin_series(mc)
    }

    /// Computes the arctangent of `self / x` with the quadrant given by the signs of `self` and `x`.
    /// The result is in the interval [-pi, pi] and is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: both `self` and `x` are zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn atan2(&self, x: &Self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if x.is_zero() {
            return match self.signum() {
                0 => Err(Error::Domain("atan2(y, x) for x = 0 and y = 0")),
                1 => half_pi(mc, cc),
                _ => Ok(half_pi(mc, cc)?.neg()),
            };
        }

        if x.is_positive() {
            if self.is_zero() {
                return Ok(ZERO.clone());
            }
            let mc_wrk = mc.with_guard(2);
            return self.div(x, mc_wrk)?.atan(mc, cc);
        }

        if self.is_zero() {
            return cc.pi(mc);
        }

        let mc_wrk = mc.with_guard(6);
        let a = self.div(x, mc_wrk)?.atan(mc_wrk, cc)?;
        let pi = cc.pi(mc_wrk)?;

        let ret = if self.is_positive() { a.add(&pi, mc_wrk)? } else { a.sub(&pi, mc_wrk)? };

        Ok(ret.round(mc))
    }

    /// Computes the arccotangent of a number. The result is in the interval (0, pi) and is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn acot(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return half_pi(mc, cc);
        }

        let mc_wrk = mc.with_guard(6);
        let r = ONE.div(self, mc_wrk)?;
        let a = r.atan(mc_wrk, cc)?;

        let ret = if self.is_negative() { cc.pi(mc_wrk)?.add(&a, mc_wrk)? } else { a };

        Ok(ret.round(mc))
    }
}
