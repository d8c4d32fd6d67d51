//! Square root.

use crate::common::consts::ONE_HALF;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::refine;
use crate::ops::refine::Refiner;

/// Guard digits of the square root refinement.
const SQRT_REFINE_GUARD: usize = 6;

impl BigDecimal {
    /// Computes the square root of a number. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is negative.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn sqrt(&self, mc: MathContext) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::Domain("sqrt(x) for x < 0"));
        }

        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        // x = m * 10^(2k), 1 <= m < 100
        let k = self.exponent().div_euclid(2);
        let m = self.move_point(-2 * k)?;

        let (seed, seed_p) = refine::seed(&m, f64::sqrt, || m.mul(&ONE_HALF, mc))?;

        let ret = Refiner::new(mc, SQRT_REFINE_GUARD).run(seed, seed_p, |y, mc| {
            // (m/y - y) / 2
            let q = m.div(y, mc)?;
            Ok(q.sub(y, mc)?.mul_full_prec(&ONE_HALF)?.round(mc))
        })?;

        ret.move_point(k)
    }
}
