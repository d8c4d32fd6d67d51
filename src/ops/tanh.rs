//! Hyperbolic tangent and cotangent.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;

impl BigDecimal {
    /// Computes the hyperbolic tangent of a number. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn tanh(&self, mc: MathContext) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        let mc_wrk = mc.with_guard(4);
        let x = self.abs();

        let ret = if x <= *ONE {
            let s = x.sinh(mc_wrk)?;
            let c = x.cosh(mc_wrk)?;
            s.div(&c, mc_wrk)?
        } else {
            let p = mc_wrk.precision() as i64 + 2;
            let limit = BigDecimal::from_i64(p * 6 / 5 + 1);

            if x > limit {
                // 1 - 2/(e^(2x) + 1) differs from 1 by less than 10^-p
                ONE.sub_full_prec(&BigDecimal::new(1.into(), -p))
            } else {
                // tanh(x) = 1 - 2 / (e^(2x) + 1)
                let e2x = x.mul_full_prec(&TWO)?.exp(mc_wrk)?;
                let d = e2x.add(&ONE, mc_wrk)?;
                let q = TWO.div(&d, mc_wrk)?;
                ONE.sub(&q, mc_wrk)?
            }
        };

        let ret = if self.is_negative() { ret.neg() } else { ret };

        Ok(ret.round(mc))
    }

    /// Computes the hyperbolic cotangent of a number. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn coth(&self, mc: MathContext) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::Domain("coth(x) for x = 0"));
        }

        mc.check_finite()?;

        let mc_wrk = mc.with_guard(4);
        let t = self.tanh(mc_wrk)?;

        ONE.div(&t, mc)
    }
}
