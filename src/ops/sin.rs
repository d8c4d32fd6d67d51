//! Sine.

use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowTwoNPlusOne;

// Polynomial coefficient generator: (-1)^k / (2k+1)!
struct SinPolycoeffGen {
    k: u64,
    fct: BigDecimal,
    neg: bool,
}

impl SinPolycoeffGen {
    fn new() -> Self {
        SinPolycoeffGen {
            k: 0,
            fct: BigDecimal::one(),
            neg: false,
        }
    }
}

impl PolycoeffGen for SinPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let num = if self.neg { BigDecimal::from_i64(-1) } else { BigDecimal::one() };
        let ret = ExactFraction::new(num, self.fct.clone())?;

        self.k += 1;
        let inc = BigDecimal::from_u64((2 * self.k) * (2 * self.k + 1));
        self.fct = self.fct.mul_full_prec(&inc)?;
        self.neg = !self.neg;

        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes the sine of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn sin(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, true, mc) {
            return Ok(ret);
        }

        let mc_wrk = mc.with_guard(6);
        let (arg, q) = self.reduce_trig_arg(mc_wrk, cc)?;

        let ret = match q {
            0 => arg.sin_series(mc_wrk)?,
            1 => arg.cos_series(mc_wrk)?,
            2 => arg.sin_series(mc_wrk)?.neg(),
            _ => arg.cos_series(mc_wrk)?.neg(),
        };

        Ok(ret.round(mc))
    }

    /// Sine using series, |x| <= pi
    pub(crate) fn sin_series(&self, mc: MathContext) -> Result<Self, Error> {
        // sin:  x - x^3/3! + x^5/5! - x^7/7! + ...
        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, true, mc) {
            return Ok(ret);
        }

        let mc_wrk = mc.with_guard(self.leading_zeros() + 2);

        let mut sc = SeriesCalculator::new(SinPolycoeffGen::new(), XPowTwoNPlusOne::new(self)?, mc_wrk, true);

        Ok(sc.calculate()?.round(mc))
    }
}
