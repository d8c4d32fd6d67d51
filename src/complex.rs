//! Complex numbers with decimal components.

use crate::common::consts::ONE;
use crate::common::consts::ONE_HALF;
use crate::common::consts::ZERO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;
use crate::ops::util::count_digits;

/// Complex number `re + im*i` with arbitrary precision decimal parts.
///
/// Functions mirror the real ones: results are rounded using the given `MathContext` part by part,
/// and functions that need constants take the constants cache `cc`.
#[derive(Debug, Clone, PartialEq)]
pub struct BigComplex {
    re: BigDecimal,
    im: BigDecimal,
}

impl BigComplex {
    /// Constructs a complex number from its real and imaginary parts.
    pub fn new(re: BigDecimal, im: BigDecimal) -> Self {
        BigComplex { re, im }
    }

    /// Constructs a complex number with zero imaginary part.
    pub fn from_real(re: BigDecimal) -> Self {
        BigComplex { re, im: ZERO.clone() }
    }

    /// Returns the real part.
    pub fn re(&self) -> &BigDecimal {
        &self.re
    }

    /// Returns the imaginary part.
    pub fn im(&self) -> &BigDecimal {
        &self.im
    }

    /// Returns true if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Returns true if the imaginary part is zero.
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// Returns the negated number.
    pub fn neg(&self) -> Self {
        BigComplex::new(self.re.neg(), self.im.neg())
    }

    /// Returns the complex conjugate.
    pub fn conj(&self) -> Self {
        BigComplex::new(self.re.clone(), self.im.neg())
    }

    /// Rounds both parts using `mc`.
    pub fn round(&self, mc: MathContext) -> Self {
        BigComplex::new(self.re.round(mc), self.im.round(mc))
    }

    /// Adds `z` to `self`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn add(&self, z: &Self, mc: MathContext) -> Result<Self, Error> {
        Ok(BigComplex::new(self.re.add(&z.re, mc)?, self.im.add(&z.im, mc)?))
    }

    /// Subtracts `z` from `self`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn sub(&self, z: &Self, mc: MathContext) -> Result<Self, Error> {
        Ok(BigComplex::new(self.re.sub(&z.re, mc)?, self.im.sub(&z.im, mc)?))
    }

    /// Multiplies `self` by `z`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn mul(&self, z: &Self, mc: MathContext) -> Result<Self, Error> {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        let ac = self.re.mul_full_prec(&z.re)?;
        let bd = self.im.mul_full_prec(&z.im)?;
        let ad = self.re.mul_full_prec(&z.im)?;
        let bc = self.im.mul_full_prec(&z.re)?;

        Ok(BigComplex::new(ac.sub(&bd, mc)?, ad.add(&bc, mc)?))
    }

    /// Divides `self` by `z`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `z` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn div(&self, z: &Self, mc: MathContext) -> Result<Self, Error> {
        if z.is_zero() {
            return Err(Error::DivisionByZero);
        }

        mc.check_finite()?;

        // (a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c^2 + d^2)
        let n = self.mul(&z.conj(), MathContext::UNLIMITED)?;
        let d = z.norm()?;

        Ok(BigComplex::new(n.re.div(&d, mc)?, n.im.div(&d, mc)?))
    }

    // re^2 + im^2, exact
    fn norm(&self) -> Result<BigDecimal, Error> {
        let r2 = self.re.mul_full_prec(&self.re)?;
        let i2 = self.im.mul_full_prec(&self.im)?;
        Ok(r2.add_full_prec(&i2))
    }

    /// Computes the absolute value of `self`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn abs(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        mc.check_finite()?;

        if self.im.is_zero() {
            return Ok(self.re.abs().round(mc));
        }

        if self.re.is_zero() {
            return Ok(self.im.abs().round(mc));
        }

        self.norm()?.sqrt(mc)
    }

    /// Computes the argument of `self` in the interval [-pi, pi]. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn angle(&self, mc: MathContext, cc: &Consts) -> Result<BigDecimal, Error> {
        self.im.atan2(&self.re, mc, cc)
    }

    /// Computes `e` to the power of `self`. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn exp(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        let mc_wrk = mc.with_guard(4);

        // e^(a + bi) = e^a * (cos(b) + sin(b)i)
        let ea = self.re.exp(mc_wrk)?;

        if self.im.is_zero() {
            return Ok(BigComplex::from_real(ea.round(mc)));
        }

        let c = self.im.cos(mc_wrk, cc)?;
        let s = self.im.sin(mc_wrk, cc)?;

        Ok(BigComplex::new(ea.mul(&c, mc)?, ea.mul(&s, mc)?))
    }

    /// Computes the principal value of the natural logarithm of `self`. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn ln(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::Domain("ln(z) for z = 0"));
        }

        mc.check_finite()?;

        // ln(z) = ln(|z|) + arg(z)i, ln(|z|) = ln(re^2 + im^2) / 2
        let mc_wrk = mc.with_guard(4);
        let l = self.norm()?.ln(mc_wrk, cc)?;
        let re = l.mul_full_prec(&ONE_HALF)?.round(mc);
        let im = self.angle(mc, cc)?;

        Ok(BigComplex::new(re, im))
    }

    /// Computes the principal square root of `self`. The result is rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn sqrt(&self, mc: MathContext) -> Result<Self, Error> {
        mc.check_finite()?;

        if self.is_zero() {
            return Ok(BigComplex::from_real(ZERO.clone()));
        }

        let mc_wrk = mc.with_guard(4);
        let m = self.abs(mc_wrk)?;

        // t = sqrt((|z| + |re|) / 2), the other part is im / (2t)
        let t = m.add(&self.re.abs(), mc_wrk)?.mul_full_prec(&ONE_HALF)?.sqrt(mc_wrk)?;
        let u = self.im.abs().div(&t.mul_full_prec(&BigDecimal::from_i64(2))?, mc_wrk)?;

        let ret = if !self.re.is_negative() {
            let u = if self.im.is_negative() { u.neg() } else { u };
            BigComplex::new(t, u)
        } else {
            let t = if self.im.is_negative() { t.neg() } else { t };
            BigComplex::new(u, t)
        };

        Ok(ret.round(mc))
    }

    /// Computes the sine of `self`. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn sin(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        // sin(a + bi) = sin(a)cosh(b) + cos(a)sinh(b)i
        let mc_wrk = mc.with_guard(4);
        let sa = self.re.sin(mc_wrk, cc)?;
        let ca = self.re.cos(mc_wrk, cc)?;
        let chb = self.im.cosh(mc_wrk)?;
        let shb = self.im.sinh(mc_wrk)?;

        Ok(BigComplex::new(sa.mul(&chb, mc)?, ca.mul(&shb, mc)?))
    }

    /// Computes the cosine of `self`. The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn cos(&self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        mc.check_finite()?;

        // cos(a + bi) = cos(a)cosh(b) - sin(a)sinh(b)i
        let mc_wrk = mc.with_guard(4);
        let sa = self.re.sin(mc_wrk, cc)?;
        let ca = self.re.cos(mc_wrk, cc)?;
        let chb = self.im.cosh(mc_wrk)?;
        let shb = self.im.sinh(mc_wrk)?;

        Ok(BigComplex::new(ca.mul(&chb, mc)?, sa.mul(&shb, mc)?.neg()))
    }

    /// Computes `self` to the power of `w` using the principal value of the logarithm.
    /// The result is rounded using `mc`.
    /// This function requires constants cache `cc` for computing the result.
    ///
    /// `0^0` is 1, `0^w` is 0 if the real part of `w` is positive.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and the real part of `w` is not positive, `w` is not zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the result is too large or too small number.
    pub fn pow(&self, w: &Self, mc: MathContext, cc: &Consts) -> Result<Self, Error> {
        if self.is_zero() {
            return if w.is_zero() {
                Ok(BigComplex::from_real(ONE.clone()))
            } else if w.re.is_positive() {
                Ok(BigComplex::from_real(ZERO.clone()))
            } else {
                Err(Error::DivisionByZero)
            };
        }

        mc.check_finite()?;

        // z^w = e^(w * ln(z))
        let mag = self.abs(MathContext::new(8, mc.rounding_mode()))?;
        let extra = (w.re.exponent().max(w.im.exponent()) + 1).max(0) as usize
            + count_digits(mag.exponent().unsigned_abs() + 1)
            + 1;
        let mc_wrk = mc.with_guard(6 + extra);

        let l = self.ln(mc_wrk, cc)?;
        let t = w.mul(&l, mc_wrk)?;

        t.exp(mc, cc)
    }
}

impl From<BigDecimal> for BigComplex {
    fn from(re: BigDecimal) -> Self {
        BigComplex::from_real(re)
    }
}
