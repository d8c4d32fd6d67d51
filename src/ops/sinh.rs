//! Hyperbolic sine.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::common::consts::TWO;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowTwoNPlusOne;

// Polynomial coefficient generator: 1 / (2k+1)!
struct SinhPolycoeffGen {
    k: u64,
    fct: BigDecimal,
}

impl PolycoeffGen for SinhPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let ret = ExactFraction::new(BigDecimal::one(), self.fct.clone())?;

        self.k += 1;
        let inc = BigDecimal::from_u64((2 * self.k) * (2 * self.k + 1));
        self.fct = self.fct.mul_full_prec(&inc)?;

        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes the hyperbolic sine of a number. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large.
    pub fn sinh(&self, mc: MathContext) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, false, mc) {
            return Ok(ret);
        }

        if self.abs() <= *TWO {
            return self.sinh_series(mc);
        }

        // sinh(x) = (e^x - e^-x) / 2
        let mc_wrk = mc.with_guard(4);
        let ex = self.exp(mc_wrk)?;
        let rex = ONE.div(&ex, mc_wrk)?;
        let ret = ex.sub(&rex, mc_wrk)?;

        Ok(ret.mul_full_prec(&ONE_HALF)?.round(mc))
    }

    /// Hyperbolic sine using series, |x| <= 2
    fn sinh_series(&self, mc: MathContext) -> Result<Self, Error> {
        // sinh:  x + x^3/3! + x^5/5! + x^7/7! + ...
        let mc_wrk = mc.with_guard(self.leading_zeros() + 2);

        let gen = SinhPolycoeffGen {
            k: 0,
            fct: BigDecimal::one(),
        };
        let mut sc = SeriesCalculator::new(gen, XPowTwoNPlusOne::new(self)?, mc_wrk, false);

        Ok(sc.calculate()?.round(mc))
    }
}
