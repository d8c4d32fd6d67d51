//! Logarithms.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::common::consts::ONE_TENTH;
use crate::common::consts::TWO;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::refine;
use crate::ops::refine::Refiner;
use crate::ops::util::count_digits;

/// Guard digits of the logarithm refinement.
const LN_REFINE_GUARD: usize = 20;

impl BigDecimal {
    /// Computes the natural logarithm of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero or negative.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn ln(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if !self.is_positive() {
            return Err(Error::Domain("ln(x) for x <= 0"));
        }

        mc.check_finite()?;

        if *self == *ONE {
            return Ok(ZERO.clone());
        }

        let d = self.sub_full_prec(&ONE);
        if d.abs() < *ONE_TENTH {
            return d.ln_1p_series(mc);
        }

        // ln(x) = ln(m) + k*ln(10), 1 <= m < 10
        let k = self.exponent();
        let mc_wrk = mc.with_guard(4);
        let m = self.move_point(-k)?;

        let mut ret = m.ln_two_three(mc_wrk, cc)?;

        if k != 0 {
            let mc_k = mc_wrk.with_guard(count_digits(k.unsigned_abs()) + 2);
            let l10 = cc.ln_10(mc_k)?;
            let kl10 = l10.mul(&BigDecimal::from_i64(k), mc_k)?;
            ret = ret.add(&kl10, mc_wrk)?;
        }

        Ok(ret.round(mc))
    }

    /// Computes ln(1 + `self`). The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    /// The result is accurate for `self` close to zero.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is less than or equal to -1.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn ln_1p(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if *self <= ONE.neg() {
            return Err(Error::Domain("ln_1p(x) for x <= -1"));
        }

        mc.check_finite()?;

        // ln(1 + x) = x - x^2/2 + ...
        if let Some(ret) = self.small_arg_round(2, self.is_positive(), mc) {
            return Ok(ret);
        }

        if self.abs() <= *ONE_HALF {
            self.ln_1p_series(mc)
        } else {
            self.add_full_prec(&ONE).ln(mc, cc)
        }
    }

    // ln(1 + d) = 2 * atanh(d / (2 + d))
    pub(crate) fn ln_1p_series(&self, mc: MathContext) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        let mc_wrk = mc.with_guard(4);
        let z = self.div(&TWO.add_full_prec(self), mc_wrk)?;
        let ret = z.atanh_series(mc_wrk)?;

        Ok(ret.mul_full_prec(&TWO)?.round(mc))
    }

    // 1 <= self < 10: reduce by factors of 2 and 3 towards 1, then refine.
    fn ln_two_three(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        let v = self.to_f64();

        let (f2, f3) = if v < 1.4 {
            (0, 0)
        } else if v < 2.5 {
            (1, 0)
        } else if v < 3.5 {
            (0, 1)
        } else if v < 5.0 {
            (2, 0)
        } else if v < 7.0 {
            (1, 1)
        } else if v < 8.5 {
            (3, 0)
        } else {
            (0, 2)
        };

        let mut x = self.clone();
        let mut ret = ZERO.clone();

        if f2 > 0 {
            x = x.div(&BigDecimal::from_i64(1 << f2), mc)?;
            let l2 = cc.ln_2(mc.with_guard(1))?;
            ret = ret.add(&l2.mul(&BigDecimal::from_i64(f2), mc)?, mc)?;
        }

        if f3 > 0 {
            x = x.div(&BigDecimal::from_i64(if f3 == 1 { 3 } else { 9 }), mc)?;
            let l3 = cc.ln_3(mc.with_guard(1))?;
            ret = ret.add(&l3.mul(&BigDecimal::from_i64(f3), mc)?, mc)?;
        }

        if x == *ONE {
            return Ok(ret);
        }

        ret.add(&x.ln_refine(mc)?, mc)
    }

    /// Natural logarithm by the Newton iteration y += 2 * (x - e^y) / (x + e^y).
    pub(crate) fn ln_refine(&self, mc: MathContext) -> Result<Self, Error> {
        let (seed, seed_p) = refine::seed(self, f64::ln, || self.div(&TWO, mc))?;

        Refiner::new(mc, LN_REFINE_GUARD).run(seed, seed_p, |y, mc| {
            let ey = y.exp(mc)?;
            let n = self.sub(&ey, mc)?;
            let d = self.add(&ey, mc)?;
            n.div(&d, mc)?.mul(&TWO, mc)
        })
    }

    /// Computes the logarithm base 2 of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero or negative.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn log2(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        let mc_wrk = mc.with_guard(4);
        let l = self.ln(mc_wrk, cc)?;
        let l2 = cc.ln_2(mc_wrk)?;
        l.div(&l2, mc)
    }

    /// Computes the logarithm base 10 of a number. The result is rounded using `mc`.
    /// Powers of 10 give exact results.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero or negative.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn log10(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if !self.is_positive() {
            return Err(Error::Domain("log10(x) for x <= 0"));
        }

        mc.check_finite()?;

        if self.mantissa() == *ONE {
            return Ok(BigDecimal::from_i64(self.exponent()).round(mc));
        }

        let mc_wrk = mc.with_guard(4);
        let l = self.ln(mc_wrk, cc)?;
        let l10 = cc.ln_10(mc_wrk)?;
        l.div(&l10, mc)
    }

    /// Computes the logarithm of a number to the base `base`. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero or negative, or `base` is zero, negative, or one.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn log(&self, base: &Self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if !base.is_positive() || *base == *ONE {
            return Err(Error::Domain("log(x, b) for b <= 0 or b = 1"));
        }

        let mc_wrk = mc.with_guard(4);
        let l = self.ln(mc_wrk, cc)?;
        let lb = base.ln(mc_wrk, cc)?;
        l.div(&lb, mc)
    }
}
