//! Arccosine.

use crate::common::consts::ASIN_SWITCH;
use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::util::half_pi;

impl BigDecimal {
    /// Computes the arccosine of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of `self` is greater than 1.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn acos(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        let x = self.abs();

        if x > *ONE {
            return Err(Error::Domain("acos(x) for |x| > 1"));
        }

        mc.check_finite()?;

        if *self == *ONE {
            return Ok(ZERO.clone());
        }

        if *self == ONE.neg() {
            return cc.pi(mc);
        }

        let mc_wrk = mc.with_guard(6);

        let ret = if x >= *ASIN_SWITCH {
            // acos(x) = asin(sqrt(1 - x^2)) for x > 0
            let t = ONE.sub_full_prec(&x).mul_full_prec(&ONE.add_full_prec(&x))?;
            let s = t.sqrt(mc_wrk)?.asin_series(mc_wrk)?;
            if self.is_negative() {
                cc.pi(mc_wrk)?.sub(&s, mc_wrk)?
            } else {
                s
            }
        } else {
            // acos(x) = pi/2 - asin(x)
            let s = self.asin_series(mc_wrk)?;
            half_pi(mc_wrk, cc)?.sub(&s, mc_wrk)?
        };

        Ok(ret.round(mc))
    }
}
