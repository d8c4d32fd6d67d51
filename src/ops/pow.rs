//! Exponentiation.

use crate::common::consts::C256;
use crate::common::consts::ONE;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::Sign;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::series::PolycoeffGen;
use crate::ops::series::SeriesCalculator;
use crate::ops::series::XPowN;
use crate::ops::util::count_digits;

// Polynomial coefficient generator: 1/k!
struct ExpPolycoeffGen {
    k: u64,
    fct: BigDecimal,
}

impl ExpPolycoeffGen {
    fn new() -> Self {
        ExpPolycoeffGen {
            k: 0,
            fct: BigDecimal::one(),
        }
    }
}

impl PolycoeffGen for ExpPolycoeffGen {
    fn next(&mut self) -> Result<ExactFraction, Error> {
        let ret = ExactFraction::new(BigDecimal::one(), self.fct.clone())?;
        self.k += 1;
        self.fct = self.fct.mul_full_prec(&BigDecimal::from_u64(self.k))?;
        Ok(ret)
    }
}

impl BigDecimal {
    /// Computes `e` to the power of `self`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn exp(&self, mc: MathContext) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(ONE.clone());
        }

        if self.is_negative() {
            let mc_wrk = mc.with_guard(4);
            let ret = self.neg().exp(mc_wrk)?;
            return ONE.div(&ret, mc);
        }

        let int = self.integral_part();
        if int.is_zero() {
            return self.exp_taylor(mc);
        }

        // exp(x) = exp(1 + fract/int)^int
        let n = int.to_i64().ok_or(Error::ExponentOverflow(Sign::Pos))?;
        let mc_wrk = mc.with_guard(10 + count_digits(n as u64));
        let fract = self.fractional_part();
        let z = ONE.add(&fract.div(&int, mc_wrk)?, mc_wrk)?;
        let t = z.exp_taylor(mc_wrk)?;

        t.powi(n, mc)
    }

    // Taylor series on x/256, then the 256th power.
    fn exp_taylor(&self, mc: MathContext) -> Result<Self, Error> {
        let mc_wrk = mc.with_guard(6);
        let x = self.div(&C256, mc_wrk)?;

        let mut sc = SeriesCalculator::new(ExpPolycoeffGen::new(), XPowN::new(&x), mc_wrk, false);
        let ret = sc.calculate()?;

        ret.powi(256, mc)
    }

    /// Computes `self` to the power of integer `n` using binary exponentiation. The result is rounded using `mc`.
    /// Unlimited precision gives the exact result for non-negative `n`. `0^0` is 1.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `n` is negative.
    ///  - UnlimitedPrecision: `n` is negative and the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn powi(&self, n: i64, mc: MathContext) -> Result<Self, Error> {
        if n == 0 {
            return Ok(ONE.clone());
        }

        if self.is_zero() {
            return if n < 0 {
                Err(Error::DivisionByZero)
            } else {
                Ok(ZERO.clone())
            };
        }

        let mc_wrk = mc.with_guard(count_digits(n.unsigned_abs()) + 2);

        if n < 0 {
            mc.check_finite()?;
            let ret = self.powi_abs(n.unsigned_abs(), mc_wrk)?;
            ONE.div(&ret, mc)
        } else {
            Ok(self.powi_abs(n as u64, mc_wrk)?.round(mc))
        }
    }

    fn powi_abs(&self, mut n: u64, mc: MathContext) -> Result<Self, Error> {
        let mut ret = ONE.clone();
        let mut x = self.clone();

        while n > 0 {
            if n & 1 != 0 {
                ret = ret.mul(&x, mc)?;
            }
            n >>= 1;
            if n > 0 {
                x = x.mul(&x, mc)?;
            }
        }

        Ok(ret)
    }

    /// Computes `self` to the power of `y`. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// `0^0` is 1, `0^y` is 0 for positive `y`. Integer `y` is handled by [`BigDecimal::powi`],
    /// so unlimited precision is accepted for non-negative integer `y`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `y` is negative.
    ///  - Domain: `self` is negative and `y` is not an integer.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited and `y` is not a non-negative integer.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn pow(&self, y: &Self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.is_zero() {
            return match y.signum() {
                0 => Ok(ONE.clone()),
                1 => Ok(ZERO.clone()),
                _ => Err(Error::DivisionByZero),
            };
        }

        let int_y = y.is_integer();
        if int_y {
            if let Some(n) = y.to_i64() {
                return self.powi(n, mc);
            }
        }

        mc.check_finite()?;

        if self.is_negative() {
            if !int_y {
                return Err(Error::Domain("pow(x, y) for x < 0 and non-integer y"));
            }
            let ret = self.neg().pow_positive(y, mc.with_guard(1), cc)?;
            let ret = if y.is_odd_integer() { ret.neg() } else { ret };
            return Ok(ret.round(mc));
        }

        self.pow_positive(y, mc, cc)
    }

    // exp(y * ln(x)) for x > 0
    fn pow_positive(&self, y: &Self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        // the absolute error of y*ln(x) becomes the relative error of the result.
        let extra = (y.exponent() + 1).max(0) as usize + count_digits(self.exponent().unsigned_abs() + 1) + 1;
        let mc_wrk = mc.with_guard(6 + extra);

        let l = self.ln(mc_wrk, cc)?;
        let t = l.mul(y, mc_wrk)?;

        t.exp(mc)
    }

    fn is_odd_integer(&self) -> bool {
        let n = self.normalize();
        let (m, e) = n.to_raw_parts();
        e == 0 && m.bit(0)
    }
}
