//! Hyperbolic arctangent and arccotangent.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::common::consts::TWO;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowTwoNPlusOne;

// Polynomial coefficient generator: 1/(2k+1)
struct AtanhPolycoeffGen {
    k: i64,
}

impl PolycoeffGen for AtanhPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let ret = ExactFraction::from_ratio(1, 2 * self.k + 1)?;
        self.k += 1;
        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes the hyperbolic arctangent of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of `self` is greater than or equal to 1.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn atanh(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.abs() >= *ONE {
            return Err(Error::Domain("atanh(x) for |x| >= 1"));
        }

        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, false, mc) {
            return Ok(ret);
        }

        if self.abs() <= *ONE_HALF {
            return self.atanh_series(mc);
        }

        // atanh(x) = ln((1 + x) / (1 - x)) / 2
        let mc_wrk = mc.with_guard(4);
        let n = ONE.add_full_prec(self);
        let d = ONE.sub_full_prec(self);
        let q = n.div(&d, mc_wrk)?;
        let ret = q.ln(mc_wrk, cc)?;

        Ok(ret.mul_full_prec(&ONE_HALF)?.round(mc))
    }

    /// Computes the hyperbolic arccotangent of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of `self` is less than or equal to 1.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn acoth(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.abs() <= *ONE {
            return Err(Error::Domain("acoth(x) for |x| <= 1"));
        }

        mc.check_finite()?;

        let mc_wrk = mc.with_guard(4);

        if self.abs() >= *TWO {
            // acoth(x) = atanh(1/x)
            let r = ONE.div(self, mc_wrk)?;
            return r.atanh_series(mc);
        }

        // acoth(x) = ln((x + 1) / (x - 1)) / 2
        let n = self.add_full_prec(&ONE);
        let d = self.sub_full_prec(&ONE);
        let q = n.div(&d, mc_wrk)?;
        let ret = q.ln(mc_wrk, cc)?;

        Ok(ret.mul_full_prec(&ONE_HALF)?.round(mc))
    }

    /// Hyperbolic arctangent using series, |x| <= 0.5
    pub(crate) fn atanh_series(&self, mc: MathContext) -> Result<Self, Error> {
        // atanh:  x + x^3/3 + x^5/5 + x^7/7 + ...
        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, false, mc) {
            return Ok(ret);
        }

        let mc_wrk = mc.with_guard(self.leading_zeros() + 2);

        let mut sc = SeriesCalculator::new(
            AtanhPolycoeffGen { k: 0 },
            XPowTwoNPlusOne::new(self)?,
            mc_wrk,
            false,
        );

        Ok(sc.calculate()?.round(mc))
    }
}
