//! Tangent and cotangent.

use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;

impl BigDecimal {
    /// Computes the tangent of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn tan(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(self.clone());
        }

        if let Some(ret) = self.small_arg_round(3, false, mc) {
            return Ok(ret);
        }

        let mc_wrk = mc.with_guard(6);
        let (arg, q) = self.reduce_trig_arg(mc_wrk, cc)?;

        let s = arg.sin_series(mc_wrk)?;
        let c = arg.cos_series(mc_wrk)?;

        // tan(r + pi/2) = -cos(r) / sin(r)
        if q % 2 == 0 {
            s.div(&c, mc)
        } else {
            c.neg().div(&s, mc)
        }
    }

    /// Computes the cotangent of a number. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn cot(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::Domain("cot(x) for x = 0"));
        }

        mc.check_finite()?;

        let mc_wrk = mc.with_guard(6);
        let (arg, q) = self.reduce_trig_arg(mc_wrk, cc)?;

        let s = arg.sin_series(mc_wrk)?;
        let c = arg.cos_series(mc_wrk)?;

        // cot(r + pi/2) = -sin(r) / cos(r)
        if q % 2 == 0 {
            c.div(&s, mc)
        } else {
            s.neg().div(&c, mc)
        }
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
    fn test_tangent() {
        let cc = Consts::new();
        let mc = MathContext::new(40, RoundingMode::HalfEven);

        assert_eq!(ZERO.tan(mc, &cc).unwrap(), ZERO.clone());
        assert_eq!(d("1").tan(mc, &cc).unwrap(), d("1.557407724654902230506974807458360173087"));
        assert_eq!(d("-2").tan(mc, &cc).unwrap(), d("2.185039863261518991643306102313682543432"));
        assert_eq!(d("1.5").tan(mc, &cc).unwrap(), d("14.10141994717171938764608365198775644566"));
        assert_eq!(d("1000").tan(mc, &cc).unwrap(), d("1.470324155702718445980208804903918569157"));
        assert_eq!(d("3e-15").tan(mc, &cc).unwrap(), d("3.000000000000000000000000000009000000000E-15"));

        assert_eq!(d("1").tan(MathContext::UNLIMITED, &cc), Err(Error::UnlimitedPrecision));
    }

    #[test]
    fn test_tangent_near_poles_and_zeros() {
        let cc = Consts::new();
        let mc = MathContext::new(20, RoundingMode::HalfEven);

        // pi/2 with 35 digits
        let x = d("1.5707963267948966192313216916397514");
        assert_eq!(x.tan(mc, &cc).unwrap(), d("2.3753767665434648105E+34"));
        assert_eq!(x.cot(mc, &cc).unwrap(), d("4.2098584699687552910E-35"));

        assert_eq!(
            d("-4.712388980384689857693965074919254326").tan(mc, &cc).unwrap(),
            d("-3.3811872875788581842E+36")
        );
        assert_eq!(
            d("3.14159265358979323846264").tan(mc, &cc).unwrap(),
            d("-3.3832795028841971694E-24")
        );
    }

    #[test]
    fn test_tangent_tiny() {
        let cc = Consts::new();
        let x = d("1e-100000");

        // tan(x) is slightly further from zero than x.
        let mc = MathContext::new(10, RoundingMode::Down);
        assert_eq!(x.tan(mc, &cc).unwrap(), d("1e-100000"));
        let mc = MathContext::new(10, RoundingMode::Up);
        assert_eq!(x.tan(mc, &cc).unwrap(), d("1.000000001e-100000"));
        assert_eq!(x.neg().tan(mc, &cc).unwrap(), d("-1.000000001e-100000"));
    }

    #[test]
    fn test_cotangent() {
        let cc = Consts::new();
        let mc = MathContext::new(40, RoundingMode::HalfEven);

        assert_eq!(d("0.5").cot(mc, &cc).unwrap(), d("1.830487721712451919268019438968816623758"));
        assert_eq!(d("-3").cot(mc, &cc).unwrap(), d("7.015252551434533469428551379526476578293"));
        assert_eq!(d("1e-10").cot(mc, &cc).unwrap(), d("9999999999.999999999966666666666666666667"));

        assert_eq!(ZERO.cot(mc, &cc), Err(Error::Domain("cot(x) for x = 0")));
    }

    #[test]
    fn test_tangent_f64() {
        let cc = Consts::new();
        let mc = MathContext::new(20, RoundingMode::HalfEven);
        for _ in 0..200 {
            let f = random::<f64>() * 3.0 - 1.5;
            let x = BigDecimal::from_f64(f).unwrap();
            let r = x.tan(mc, &cc).unwrap().to_f64();
            let expected = f.tan();
            assert!((r - expected).abs() <= 1e-14 * expected.abs().max(1.0), "{} {} {}", f, r, expected);
        }
    }
}
