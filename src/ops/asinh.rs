//! Hyperbolic arcsine.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;

impl BigDecimal {
    /// Computes the hyperbolic arcsine of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn asinh(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ZERO.clone());
        }

        let mc_wrk = mc.with_guard(6);
        let x = self.abs();
        let x2 = x.mul_full_prec(&x)?;

        let ret = if x < *ONE_HALF {
            // asinh(x) = ln(1 + x + x^2 / (1 + sqrt(1 + x^2)))
            let s = ONE.add_full_prec(&x2).sqrt(mc_wrk)?;
            let t = x2.div(&ONE.add(&s, mc_wrk)?, mc_wrk)?;
            x.add(&t, mc_wrk)?.ln_1p_series(mc_wrk)?
        } else {
            // asinh(x) = ln(x + sqrt(x^2 + 1))
            let s = x2.add_full_prec(&ONE).sqrt(mc_wrk)?;
            x.add(&s, mc_wrk)?.ln(mc_wrk, cc)?
        };

        let ret = if self.is_negative() { ret.neg() } else { ret };

        Ok(ret.round(mc))
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
    fn test_asinh() {
        let cc = Consts::new();
        let mc = MathContext::new(40, RoundingMode::HalfEven);

        assert_eq!(ZERO.asinh(mc, &cc).unwrap(), ZERO.clone());
        assert_eq!(d("0.1").asinh(mc, &cc).unwrap(), d("0.09983407889920756332730312470476944326771"));
        assert_eq!(d("-0.4").asinh(mc, &cc).unwrap(), d("-0.3900353197707152760801633798836296449597"));
        assert_eq!(d("1").asinh(mc, &cc).unwrap(), d("0.8813735870195430252326093249797923090282"));
        assert_eq!(d("-30").asinh(mc, &cc).unwrap(), d("-4.094622224330530569959354769455867629637"));
        assert_eq!(d("1e100").asinh(mc, &cc).unwrap(), d("230.9516564799645137112163775898945973282"));
        assert_eq!(d("5e-25").asinh(mc, &cc).unwrap(), d("5.000000000000000000000000000000000000000E-25"));

        assert_eq!(d("1").asinh(MathContext::UNLIMITED, &cc), Err(Error::UnlimitedPrecision));
    }

    #[test]
    fn test_asinh_sinh() {
        let cc = Consts::new();
        let mc = MathContext::new(40, RoundingMode::HalfEven);
        let mc_wrk = mc.with_guard(5);
        for _ in 0..100 {
            let x = BigDecimal::from_f64(random::<f64>() * 10.0 - 5.0).unwrap();
            let a = x.asinh(mc_wrk, &cc).unwrap();
            let s = a.sinh(mc_wrk).unwrap();
            let diff = s.sub_full_prec(&x).abs();
            assert!(diff <= d("1e-38").mul_full_prec(&x.abs().add_full_prec(&ONE)).unwrap(), "{} {}", x, s);
        }
    }
}
