//! Exact fractions with decimal numerator and denominator.

use core::cmp::Ordering;
use core::fmt::Display;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use num_traits::Zero;

use crate::common::util::pow10;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::num::BigDecimal;

/// An exact rational number `numerator / denominator`.
///
/// Arithmetic on fractions never rounds; only the conversion to decimal does.
/// The denominator is always positive and zero is represented as `0/1`.
/// Equality compares the (numerator, denominator) pairs, so `2/4` and `1/2`
/// are different until reduced, while ordering compares the values.
#[derive(Clone, Debug)]
pub struct ExactFraction {
    num: BigDecimal,
    den: BigDecimal,
}

impl ExactFraction {
    /// Creates the fraction `num / den`. The sign is moved into the numerator.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `den` is zero.
    pub fn new(num: BigDecimal, den: BigDecimal) -> Result<Self, Error> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new_unchecked(num, den))
    }

    // den must be non-zero.
    fn new_unchecked(num: BigDecimal, den: BigDecimal) -> Self {
        if num.is_zero() {
            Self::zero()
        } else if den.is_negative() {
            ExactFraction {
                num: num.neg(),
                den: den.neg(),
            }
        } else {
            ExactFraction { num, den }
        }
    }

    /// Returns 0/1.
    pub fn zero() -> Self {
        ExactFraction {
            num: BigDecimal::zero(),
            den: BigDecimal::one(),
        }
    }

    /// Returns 1/1.
    pub fn one() -> Self {
        Self::from_i64(1)
    }

    /// Creates the fraction `v/1`.
    pub fn from_i64(v: i64) -> Self {
        Self::from_decimal(BigDecimal::from_i64(v))
    }

    /// Creates the fraction `num/den`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `den` is zero.
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, Error> {
        Self::new(BigDecimal::from_i64(num), BigDecimal::from_i64(den))
    }

    /// Creates the fraction `v/1`.
    pub fn from_decimal(v: BigDecimal) -> Self {
        Self::new_unchecked(v, BigDecimal::one())
    }

    /// Returns the numerator.
    pub fn numerator(&self) -> &BigDecimal {
        &self.num
    }

    /// Returns the denominator.
    pub fn denominator(&self) -> &BigDecimal {
        &self.den
    }

    /// Returns true if the fraction is zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if the fraction equals one.
    pub fn is_one(&self) -> bool {
        self.num == self.den
    }

    /// Returns -1, 0, or 1 depending on the sign of the fraction.
    pub fn signum(&self) -> i8 {
        self.num.signum()
    }

    /// Returns true if the value of the fraction is an integer.
    pub fn is_integer(&self) -> bool {
        let (n, d) = self.to_integers();
        (n % d).is_zero()
    }

    /// Returns -self.
    pub fn neg(&self) -> Self {
        ExactFraction {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }

    /// Returns |self|.
    pub fn abs(&self) -> Self {
        ExactFraction {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Returns self + d2.
    /// The numerators are added exactly, see [`BigDecimal::add_full_prec`] for the cost of
    /// adding numbers with far apart exponents.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the numerator or the denominator is out of range.
    pub fn add(&self, d2: &Self) -> Result<Self, Error> {
        if self.den == d2.den {
            return Ok(Self::new_unchecked(
                self.num.add_full_prec(&d2.num),
                self.den.clone(),
            ));
        }
        let n1 = self.num.mul_full_prec(&d2.den)?;
        let n2 = d2.num.mul_full_prec(&self.den)?;
        let den = self.den.mul_full_prec(&d2.den)?;
        Ok(Self::new_unchecked(n1.add_full_prec(&n2), den))
    }

    /// Returns self - d2.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the numerator or the denominator is out of range.
    pub fn sub(&self, d2: &Self) -> Result<Self, Error> {
        self.add(&d2.neg())
    }

    /// Returns self * d2.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the numerator or the denominator is out of range.
    pub fn mul(&self, d2: &Self) -> Result<Self, Error> {
        let num = self.num.mul_full_prec(&d2.num)?;
        let den = self.den.mul_full_prec(&d2.den)?;
        Ok(Self::new_unchecked(num, den))
    }

    /// Returns self * v.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the numerator is out of range.
    pub fn mul_decimal(&self, v: &BigDecimal) -> Result<Self, Error> {
        Ok(Self::new_unchecked(
            self.num.mul_full_prec(v)?,
            self.den.clone(),
        ))
    }

    /// Returns self / d2.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - ExponentOverflow: the exponent of the numerator or the denominator is out of range.
    pub fn div(&self, d2: &Self) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let num = self.num.mul_full_prec(&d2.den)?;
        let den = self.den.mul_full_prec(&d2.num)?;
        Ok(Self::new_unchecked(num, den))
    }

    /// Returns 1/self.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn reciprocal(&self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new_unchecked(self.den.clone(), self.num.clone()))
    }

    /// Returns self + 1.
    pub fn increment(&self) -> Self {
        Self::new_unchecked(self.num.add_full_prec(&self.den), self.den.clone())
    }

    /// Returns self - 1.
    pub fn decrement(&self) -> Self {
        Self::new_unchecked(self.num.sub_full_prec(&self.den), self.den.clone())
    }

    /// Returns self^n using binary exponentiation. `0^0` is 1.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `n` is negative.
    ///  - ExponentOverflow: the exponent of the numerator or the denominator is out of range.
    pub fn pow(&self, n: i32) -> Result<Self, Error> {
        if n < 0 {
            return self.reciprocal()?.pow_u(n.unsigned_abs());
        }
        self.pow_u(n as u32)
    }

    fn pow_u(&self, mut n: u32) -> Result<Self, Error> {
        let mut num = BigDecimal::one();
        let mut den = BigDecimal::one();
        let mut bnum = self.num.clone();
        let mut bden = self.den.clone();
        while n > 0 {
            if n & 1 != 0 {
                num = num.mul_full_prec(&bnum)?;
                den = den.mul_full_prec(&bden)?;
            }
            n >>= 1;
            if n > 0 {
                bnum = bnum.mul_full_prec(&bnum)?;
                bden = bden.mul_full_prec(&bden)?;
            }
        }
        Ok(Self::new_unchecked(num, den))
    }

    /// Returns the smaller of two fractions.
    pub fn min(self, d2: Self) -> Self {
        if d2 < self {
            d2
        } else {
            self
        }
    }

    /// Returns the larger of two fractions.
    pub fn max(self, d2: Self) -> Self {
        if d2 > self {
            d2
        } else {
            self
        }
    }

    /// Returns the integer part of the value, truncated towards zero.
    pub fn integer_part(&self) -> Self {
        let (n, d) = self.to_integers();
        Self::from_decimal(BigDecimal::from(n / d))
    }

    /// Returns the fractional part of the value. It has the sign of the value.
    pub fn fraction_part(&self) -> Self {
        let (n, d) = self.to_integers();
        Self::new_unchecked(BigDecimal::from(n % &d), BigDecimal::from(d))
    }

    /// Returns the canonical form of the fraction: integer numerator and denominator without common divisors.
    pub fn reduce(&self) -> Self {
        let (n, d) = self.to_integers();
        let g = n.gcd(&d);
        if g.is_one() {
            return Self::new_unchecked(BigDecimal::from(n), BigDecimal::from(d));
        }
        Self::new_unchecked(BigDecimal::from(n / &g), BigDecimal::from(d / g))
    }

    /// Converts the fraction to a decimal number rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn to_decimal(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        self.num.div(&self.den, mc)
    }

    /// Converts the fraction to a decimal number with at least `DEFAULT_P` significant digits,
    /// or more if the numerator or the denominator have more digits.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the exponent of the result is out of range.
    pub fn to_decimal_default(&self) -> Result<BigDecimal, Error> {
        let p = (DEFAULT_P as u64)
            .max(self.num.precision())
            .max(self.den.precision());
        self.to_decimal(MathContext::new(p as usize, RoundingMode::HalfEven))
    }

    /// Returns the fraction of the decimal value of `self` rounded to `precision` digits.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: `precision` is zero.
    pub fn with_precision(&self, precision: usize) -> Result<Self, Error> {
        let v = self.to_decimal(MathContext::new(precision, RoundingMode::HalfEven))?;
        Ok(Self::from_decimal(v))
    }

    /// Converts the fraction to the nearest `f64` value.
    pub fn to_f64(&self) -> f64 {
        match self.to_decimal(MathContext::new(20, RoundingMode::HalfEven)) {
            Ok(v) => v.to_f64(),
            Err(_) => f64::NAN,
        }
    }

    /// Numerator and denominator as integers with the same power of ten removed.
    fn to_integers(&self) -> (BigInt, BigInt) {
        let (nm, ne) = self.num.to_raw_parts();
        let (dm, de) = self.den.to_raw_parts();
        let s = ne.min(de);
        let n = nm * BigInt::from(pow10((ne - s) as u64));
        let d = dm * BigInt::from(pow10((de - s) as u64));
        (n, d)
    }

    /// Returns the Bernoulli number B(n) computed exactly with the Akiyama-Tanigawa algorithm.
    /// With this convention B(1) = 1/2.
    ///
    /// ## Errors
    ///
    ///  - Domain: `n` is negative.
    pub fn bernoulli(n: i32) -> Result<Self, Error> {
        if n < 0 {
            return Err(Error::Domain("bernoulli(n) for n < 0"));
        }
        let n = n as usize;
        let mut arr: Vec<ExactFraction> = Vec::with_capacity(n + 1);
        for m in 0..=n {
            arr.push(Self::from_ratio(1, m as i64 + 1)?);
            for j in (1..=m).rev() {
                let diff = arr[j - 1].sub(&arr[j])?;
                arr[j - 1] = diff.mul_decimal(&BigDecimal::from_usize(j))?.reduce();
            }
        }
        Ok(arr.swap_remove(0))
    }
}

impl PartialEq for ExactFraction {
    fn eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

impl PartialOrd for ExactFraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // denominators are positive
        let a = self.num.mul_full_prec(&other.den).ok()?;
        let b = other.num.mul_full_prec(&self.den).ok()?;
        Some(a.cmp(&b))
    }
}

impl Display for ExactFraction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.den == BigDecimal::one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn fr(n: i64, d: i64) -> ExactFraction {
        ExactFraction::from_ratio(n, d).unwrap()
    }

    fn random_fraction() -> ExactFraction {
        // numerator and denominator with random decimal exponents
        let n = BigDecimal::new(BigInt::from(random::<i32>()), (random::<u8>() % 20) as i64 - 10);
        let mut dm = random::<i32>();
        if dm == 0 {
            dm = 7;
        }
        let d = BigDecimal::new(BigInt::from(dm), (random::<u8>() % 20) as i64 - 10);
        ExactFraction::new(n, d).unwrap()
    }

    #[test]
    fn test_construction() {
        let f = fr(3, -4);
        assert!(f.numerator().is_negative());
        assert!(f.denominator().is_positive());

        let z = fr(0, -5);
        assert_eq!(z, ExactFraction::zero());
        assert_eq!(*z.denominator(), BigDecimal::one());

        assert_eq!(ExactFraction::from_ratio(1, 0), Err(Error::DivisionByZero));
        assert_eq!(
            ExactFraction::new(BigDecimal::one(), BigDecimal::zero()),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(fr(1, 2).add(&fr(1, 3)).unwrap().reduce(), fr(5, 6));
        assert_eq!(fr(1, 2).sub(&fr(1, 3)).unwrap().reduce(), fr(1, 6));
        assert_eq!(fr(2, 3).mul(&fr(3, 4)).unwrap().reduce(), fr(1, 2));
        assert_eq!(fr(2, 3).div(&fr(4, 9)).unwrap().reduce(), fr(3, 2));
        assert_eq!(fr(2, 3).reciprocal().unwrap(), fr(3, 2));
        assert_eq!(fr(-2, 3).reciprocal().unwrap(), fr(-3, 2));
        assert_eq!(fr(2, 3).increment(), fr(5, 3));
        assert_eq!(fr(2, 3).decrement(), fr(-1, 3));
        assert_eq!(fr(2, 3).neg(), fr(-2, 3));
        assert_eq!(fr(-2, 3).abs(), fr(2, 3));
        assert_eq!(fr(2, 3).pow(3).unwrap(), fr(8, 27));
        assert_eq!(fr(2, 3).pow(-2).unwrap(), fr(9, 4));
        assert_eq!(fr(2, 3).pow(0).unwrap(), ExactFraction::one());
        assert_eq!(ExactFraction::zero().pow(-1), Err(Error::DivisionByZero));
        assert_eq!(ExactFraction::zero().reciprocal(), Err(Error::DivisionByZero));
        assert_eq!(fr(1, 2).div(&ExactFraction::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_ne!(fr(2, 4), fr(1, 2));
        assert_eq!(fr(2, 4).reduce(), fr(1, 2));
        assert!(fr(2, 4).partial_cmp(&fr(1, 2)) == Some(Ordering::Equal));
        assert!(fr(1, 3) < fr(1, 2));
        assert!(fr(-1, 2) < fr(1, 3));
        assert_eq!(fr(1, 3).max(fr(1, 2)), fr(1, 2));
        assert_eq!(fr(1, 3).min(fr(1, 2)), fr(1, 3));

        // decimal numerator: 1.5 / 4.5 = 1/3
        let f = ExactFraction::new("1.5".parse().unwrap(), "4.5".parse().unwrap()).unwrap();
        assert_eq!(f.reduce(), fr(1, 3));
    }

    #[test]
    fn test_parts() {
        assert!(fr(6, 3).is_integer());
        assert!(!fr(7, 3).is_integer());
        assert_eq!(fr(7, 3).integer_part(), ExactFraction::from_i64(2));
        assert_eq!(fr(7, 3).fraction_part().reduce(), fr(1, 3));
        assert_eq!(fr(-7, 3).integer_part(), ExactFraction::from_i64(-2));
        assert_eq!(fr(-7, 3).fraction_part().reduce(), fr(-1, 3));
        assert!(fr(3, 3).is_one());
        assert_eq!(fr(-3, 4).signum(), -1);
    }

    #[test]
    fn test_to_decimal() {
        let mc = MathContext::new(10, RoundingMode::HalfEven);
        assert_eq!(fr(1, 3).to_decimal(mc).unwrap(), "0.3333333333".parse().unwrap());
        assert_eq!(fr(-2, 3).to_decimal(mc).unwrap(), "-0.6666666667".parse().unwrap());

        let d = fr(1, 3).to_decimal_default().unwrap();
        assert_eq!(d.precision(), 128);

        // integer-like fractions keep their magnitude
        let big = ExactFraction::from_decimal(BigDecimal::new(BigInt::from(10).pow(200) + 1, 0));
        assert_eq!(big.to_decimal_default().unwrap().precision(), 201);

        assert_eq!(fr(1, 3).with_precision(3).unwrap(), ExactFraction::from_decimal("0.333".parse().unwrap()));
        assert!((fr(1, 3).to_f64() - 1.0 / 3.0).abs() < 1e-16);
        assert_eq!(fr(1, 3).to_string(), "1/3");
        assert_eq!(fr(4, 1).to_string(), "4");
    }

    #[test]
    fn test_exactness() {
        for _ in 0..1000 {
            let a = random_fraction();
            let b = random_fraction();

            let c = a.add(&b).unwrap().sub(&b).unwrap();
            assert!(c.partial_cmp(&a) == Some(Ordering::Equal));
            assert_eq!(c.reduce(), a.reduce());

            let c = a.mul(&b).unwrap().div(&b).unwrap();
            assert!(c.partial_cmp(&a) == Some(Ordering::Equal));
            assert_eq!(c.reduce(), a.reduce());
        }
    }

    #[test]
    fn test_bernoulli() {
        let expected = [
            fr(1, 1),
            fr(1, 2),
            fr(1, 6),
            ExactFraction::zero(),
            fr(-1, 30),
            ExactFraction::zero(),
            fr(1, 42),
            ExactFraction::zero(),
            fr(-1, 30),
            ExactFraction::zero(),
            fr(5, 66),
        ];
        for (n, b) in expected.iter().enumerate() {
            assert_eq!(ExactFraction::bernoulli(n as i32).unwrap().reduce(), *b, "B({})", n);
        }
        assert_eq!(ExactFraction::bernoulli(20).unwrap().reduce(), fr(-174611, 330));
        assert!(ExactFraction::bernoulli(-1).is_err());
    }
}
