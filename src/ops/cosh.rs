//! Hyperbolic cosine.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::common::consts::TWO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowTwoN;

// Polynomial coefficient generator: 1 / (2k)!
struct CoshPolycoeffGen {
    k: u64,
    fct: BigDecimal,
}

impl PolycoeffGen for CoshPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let ret = ExactFraction::new(BigDecimal::one(), self.fct.clone())?;

        self.k += 1;
        let inc = BigDecimal::from_u64((2 * self.k - 1) * (2 * self.k));
        self.fct = self.fct.mul_full_prec(&inc)?;

        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes the hyperbolic cosine of a number. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large.
    pub fn cosh(&self, mc: MathContext) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ONE.clone());
        }

        if self.abs() <= *TWO {
            // cosh:  1 + x^2/2! + x^4/4! + x^6/6! + ...
            let mc_wrk = mc.with_guard(2);
            let gen = CoshPolycoeffGen {
                k: 0,
                fct: BigDecimal::one(),
            };
            let mut sc = SeriesCalculator::new(gen, XPowTwoN::new(self)?, mc_wrk, false);
            return Ok(sc.calculate()?.round(mc));
        }

        // cosh(x) = (e^x + e^-x) / 2
        let mc_wrk = mc.with_guard(4);
        let ex = self.exp(mc_wrk)?;
        let rex = ONE.div(&ex, mc_wrk)?;
        let ret = ex.add(&rex, mc_wrk)?;

        Ok(ret.mul_full_prec(&ONE_HALF)?.round(mc))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::ZERO;
    use crate::defs::RoundingMode;
    use rand::random;

    fn d(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_cosh() {
        let mc = MathContext::new(40, RoundingMode::HalfEven);

        assert_eq!(ZERO.cosh(mc).unwrap(), ONE.clone());
        assert_eq!(d("1").cosh(mc).unwrap(), d("1.543080634815243778477905620757061682602"));
        assert_eq!(d("-1").cosh(mc).unwrap(), d("1.543080634815243778477905620757061682602"));
        assert_eq!(d("2").cosh(mc).unwrap(), d("3.762195691083631459562213477773746108294"));
        assert_eq!(d("7.25").cosh(mc).unwrap(), d("704.0527791895422087845749558070041999822"));
        assert_eq!(d("1e-30").cosh(mc).unwrap(), ONE.clone());

        assert_eq!(d("1").cosh(MathContext::UNLIMITED), Err(Error::UnlimitedPrecision));
    }

    #[test]
    fn test_cosh_sinh_identity() {
        let mc = MathContext::new(40, RoundingMode::HalfEven);
        let mc_wrk = mc.with_guard(10);
        for _ in 0..50 {
            let x = BigDecimal::from_f64(random::<f64>() * 8.0 - 4.0).unwrap();
            let c = x.cosh(mc_wrk).unwrap();
            let s = x.sinh(mc_wrk).unwrap();
            let one = c.mul(&c, mc_wrk).unwrap().sub(&s.mul(&s, mc_wrk).unwrap(), mc).unwrap();
            assert_eq!(one, ONE.clone(), "{}", x);
        }
    }
}
