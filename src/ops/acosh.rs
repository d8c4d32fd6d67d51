//! Hyperbolic arccosine.

use crate::common::consts::ONE;
use crate::common::consts::ONE_TENTH;
use crate::common::consts::TWO;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;

impl BigDecimal {
    /// Computes the hyperbolic arccosine of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is less than 1.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn acosh(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if *self < *ONE {
            return Err(Error::Domain("acosh(x) for x < 1"));
        }

        mc.check_finite()?;

        if *self == *ONE {
            return Ok(ZERO.clone());
        }

        let mc_wrk = mc.with_guard(6);
        let t = self.sub_full_prec(&ONE);

        let ret = if t < *ONE_TENTH {
            // acosh(1 + t) = ln(1 + t + sqrt(t * (t + 2)))
            let s = t.mul_full_prec(&t.add_full_prec(&TWO))?.sqrt(mc_wrk)?;
            t.add(&s, mc_wrk)?.ln_1p_series(mc_wrk)?
        } else {
            // acosh(x) = ln(x + sqrt((x - 1) * (x + 1)))
            let s = t.mul_full_prec(&self.add_full_prec(&ONE))?.sqrt(mc_wrk)?;
            self.add(&s, mc_wrk)?.ln(mc_wrk, cc)?
        };

        Ok(ret.round(mc))
    }
}
