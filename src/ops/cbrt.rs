//! Roots of arbitrary degree.

use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::BigDecimal;
use crate::ops::refine;
use crate::ops::refine::Refiner;

/// Guard digits of the root refinement.
const ROOT_REFINE_GUARD: usize = 10;

impl BigDecimal {
    /// Computes the root of degree `n` of a number. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is negative, or `n` is not positive.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn root(&self, n: i64, mc: MathContext) -> Result<Self, Error> {
        if n <= 0 {
            return Err(Error::Domain("root(x, n) for n <= 0"));
        }

        if self.is_negative() {
            return Err(Error::Domain("root(x, n) for x < 0"));
        }

        mc.check_finite()?;

        if n == 1 {
            return Ok(self.round(mc));
        }

        if n == 2 {
            return self.sqrt(mc);
        }

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        // x = m * 10^(nk), 1 <= m < 10^n
        let k = self.exponent().div_euclid(n);
        let shift = k.checked_mul(n).ok_or(Error::ExponentOverflow(Sign::Pos))?;
        let m = self.move_point(-shift)?;
        let nd = BigDecimal::from_i64(n);

        // beyond the range of f64 the seed is taken from the decimal exponent of m alone.
        let (seed, seed_p) = refine::seed(
            &m,
            |v| v.powf(1.0 / n as f64),
            || BigDecimal::from_f64(10f64.powf(m.exponent() as f64 / n as f64)),
        )?;

        let ret = Refiner::new(mc, ROOT_REFINE_GUARD).run(seed, seed_p, |y, mc| {
            // (m/y^(n-1) - y) / n
            let yn1 = y.powi(n - 1, mc)?;
            let q = m.div(&yn1, mc)?;
            q.sub(y, mc)?.div(&nd, mc)
        })?;

        ret.move_point(k)
    }

    /// Computes the cube root of a number. The result is rounded using `mc`.
    /// Negative numbers have negative cube roots.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn cbrt(&self, mc: MathContext) -> Result<Self, Error> {
        if self.is_negative() {
            let mc_wrk = mc.with_guard(1);
            let ret = self.neg().root(3, mc_wrk)?;
            Ok(ret.neg().round(mc))
        } else {
            self.root(3, mc)
        }
    }
}
