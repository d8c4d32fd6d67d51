//! Arcsine.

use crate::common::consts::ASIN_SWITCH;
use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowTwoNPlusOne;
use crate::ops::util::half_pi;

// Polynomial coefficient generator: (2k-1)!! / ((2k)!! * (2k+1))
struct AsinPolycoeffGen {
    k: u64,
    num: BigDecimal,
    den: BigDecimal,
}

impl AsinPolycoeffGen {
    fn new() -> Self {
        AsinPolycoeffGen {
            k: 0,
            num: BigDecimal::one(),
            den: BigDecimal::one(),
        }
    }
}

impl PolycoeffGen for AsinPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let den = self.den.mul_full_prec(&BigDecimal::from_u64(2 * self.k + 1))?;
        let ret = ExactFraction::new(self.num.clone(), den)?;

        self.k += 1;
        self.num = self.num.mul_full_prec(&BigDecimal::from_u64(2 * self.k - 1))?;
        self.den = self.den.mul_full_prec(&BigDecimal::from_u64(2 * self.k))?;

        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes the arcsine of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: the absolute value of `self` is greater than 1.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn asin(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        let x = self.abs();

        if x > *ONE {
            return Err(Error::Domain("asin(x) for |x| > 1"));
        }

        mc.check_finite()?;

        if x.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, false, mc) {
            return Ok(ret);
        }

        let mc_wrk = mc.with_guard(6);

        let ret = if x == *ONE {
            half_pi(mc_wrk, cc)?
        } else if x >= *ASIN_SWITCH {
            // asin(x) = pi/2 - asin(sqrt(1 - x^2))
            let t = ONE.sub_full_prec(&x).mul_full_prec(&ONE.add_full_prec(&x))?;
            let s = t.sqrt(mc_wrk)?.asin_series(mc_wrk)?;
            half_pi(mc_wrk, cc)?.sub(&s, mc_wrk)?
        } else {
            x.asin_series(mc_wrk)?
        };

        let ret = if self.is_negative() { ret.neg() } else { ret };

        Ok(ret.round(mc))
    }

    /// Arcsine using series, |x| < 0.7072
    pub(crate) fn asin_series(&self, mc: MathContext) -> Result<Self, Error> {
        // asin:  x + x^3/6 + 3x^5/40 + 5x^7/112 + ...
        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        if let Some(ret) = self.small_arg_round(3, false, mc) {
            return Ok(ret);
        }

        let mc_wrk = mc.with_guard(self.leading_zeros() + 2);

        let mut sc = SeriesCalculator::new(AsinPolycoeffGen::new(), XPowTwoNPlusOne::new(self)?, mc_wrk, false);

        Ok(sc.calculate()?.round(mc))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use rand::random;

    fn d(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_arcsine() {
        let cc = Consts::new();
        let mc = MathContext::new(40, RoundingMode::HalfEven);

        assert_eq!(ZERO.asin(mc, &cc).unwrap(), ZERO.clone());
        assert_eq!(d("0.5").asin(mc, &cc).unwrap(), d("0.5235987755982988730771072305465838140329"));
        assert_eq!(d("-0.3").asin(mc, &cc).unwrap(), d("-0.3046926540153975079720029612275291669546"));
        assert_eq!(d("0.8").asin(mc, &cc).unwrap(), d("0.9272952180016122324285124629224288040571"));
        assert_eq!(d("0.999999").asin(mc, &cc).unwrap(), d("1.569382113114672367468249895867095793635"));
        assert_eq!(d("1").asin(mc, &cc).unwrap(), d("1.570796326794896619231321691639751442099"));
        assert_eq!(d("-1").asin(mc, &cc).unwrap(), d("-1.570796326794896619231321691639751442099"));
        assert_eq!(d("2.5e-30").asin(mc, &cc).unwrap(), d("2.500000000000000000000000000000000000000E-30"));

        assert_eq!(d("1.0000001").asin(mc, &cc), Err(Error::Domain("asin(x) for |x| > 1")));
        assert_eq!(d("-2").asin(mc, &cc), Err(Error::Domain("asin(x) for |x| > 1")));
        assert_eq!(d("0.5").asin(MathContext::UNLIMITED, &cc), Err(Error::UnlimitedPrecision));

        let x = d("-1e-100000");
        assert_eq!(x.asin(MathContext::new(10, RoundingMode::HalfEven), &cc).unwrap(), x);
        assert_eq!(x.asin(MathContext::new(10, RoundingMode::Floor), &cc).unwrap(), d("-1.000000001e-100000"));
        assert_eq!(x.asin(MathContext::new(10, RoundingMode::Ceiling), &cc).unwrap(), x);
    }

    #[test]
    fn test_arcsine_sine() {
        let cc = Consts::new();
        let mc = MathContext::new(40, RoundingMode::HalfEven);
        let mc_wrk = mc.with_guard(5);
        for _ in 0..100 {
            let x = BigDecimal::from_f64(random::<f64>() * 2.0 - 1.0).unwrap();
            let a = x.asin(mc_wrk, &cc).unwrap();
            let s = a.sin(mc_wrk, &cc).unwrap();
            let diff = s.sub_full_prec(&x).abs();
            assert!(diff < d("1e-38"), "{} {}", x, s);
        }
    }
}
