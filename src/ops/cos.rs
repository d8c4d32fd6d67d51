//! Cosine.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowTwoN;

// Polynomial coefficient generator: (-1)^k / (2k)!
struct CosPolycoeffGen {
    k: u64,
    fct: BigDecimal,
    neg: bool,
}

impl CosPolycoeffGen {
    fn new() -> Self {
        CosPolycoeffGen {
            k: 0,
            fct: BigDecimal::one(),
            neg: false,
        }
    }
}

impl PolycoeffGen for CosPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let num = if self.neg { BigDecimal::from_i64(-1) } else { BigDecimal::one() };
        let ret = ExactFraction::new(num, self.fct.clone())?;

        self.k += 1;
        let inc = BigDecimal::from_u64((2 * self.k - 1) * (2 * self.k));
        self.fct = self.fct.mul_full_prec(&inc)?;
        self.neg = !self.neg;

        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes the cosine of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn cos(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ONE.clone());
        }

        // cos(x) = 1 - x^2/2 + ..., where x^2/2 lies below half of the last digit of 1.
        if 2 * self.exponent() < -(mc.precision() as Exponent) - 3 {
            let h = self.mul_full_prec(self)?.mul_full_prec(&ONE_HALF)?;
            return ONE.sub(&h, mc);
        }

        let mc_wrk = mc.with_guard(6);
        let (arg, q) = self.reduce_trig_arg(mc_wrk, cc)?;

        let ret = match q {
            0 => arg.cos_series(mc_wrk)?,
            1 => arg.sin_series(mc_wrk)?.neg(),
            2 => arg.cos_series(mc_wrk)?.neg(),
            _ => arg.sin_series(mc_wrk)?,
        };

        Ok(ret.round(mc))
    }

    /// Cosine using series, |x| <= pi
    pub(crate) fn cos_series(&self, mc: MathContext) -> Result<Self, Error> {
        // cos:  1 - x^2/2! + x^4/4! - x^6/6! + ...
        let mc_wrk = mc.with_guard(2);

        let mut sc = SeriesCalculator::new(CosPolycoeffGen::new(), XPowTwoN::new(self)?, mc_wrk, true);

        Ok(sc.calculate()?.round(mc))
    }
}
