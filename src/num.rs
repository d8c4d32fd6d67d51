//! Arbitrary precision decimal number and its basic arithmetic.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign as IntSign;
use num_integer::Integer;
use num_traits::Signed;
use num_traits::ToPrimitive;
use num_traits::Zero;

use crate::common::util::decimal_digits;
use crate::common::util::digits_to_exp;
use crate::common::util::exp_add;
use crate::common::util::exp_sub;
use crate::common::util::pow10;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;

/// A decimal number `m * 10^e` with an arbitrary precision integer coefficient `m`.
///
/// Values are immutable. Equality and ordering compare numeric values,
/// so `1.50` equals `1.5`.
#[derive(Clone, Debug)]
pub struct BigDecimal {
    m: BigInt,
    e: Exponent,
}

impl BigDecimal {
    /// Constructs the number `m * 10^e`.
    pub fn new(m: BigInt, e: Exponent) -> Self {
        BigDecimal { m, e }
    }

    /// Returns zero.
    pub fn zero() -> Self {
        BigDecimal::new(BigInt::zero(), 0)
    }

    /// Returns one.
    pub fn one() -> Self {
        BigDecimal::from_i64(1)
    }

    /// Constructs a number from an integer.
    pub fn from_i64(v: i64) -> Self {
        BigDecimal::new(BigInt::from(v), 0)
    }

    /// Constructs a number from an unsigned integer.
    pub fn from_u64(v: u64) -> Self {
        BigDecimal::new(BigInt::from(v), 0)
    }

    /// Constructs a number from `usize`.
    pub fn from_usize(v: usize) -> Self {
        BigDecimal::new(BigInt::from(v), 0)
    }

    /// Constructs a number from the shortest decimal representation of `f`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::Domain("f64 value is not finite"));
        }
        format!("{:e}", f).parse()
    }

    /// Decomposes the number into the integer coefficient and the exponent.
    pub fn to_raw_parts(&self) -> (&BigInt, Exponent) {
        (&self.m, self.e)
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns true if the number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns -1, 0, or 1 depending on the sign of the number.
    pub fn signum(&self) -> i8 {
        match self.m.sign() {
            IntSign::Minus => -1,
            IntSign::NoSign => 0,
            IntSign::Plus => 1,
        }
    }

    /// Returns the sign of the number. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns the number of decimal digits in the coefficient.
    pub fn precision(&self) -> u64 {
        decimal_digits(self.m.magnitude())
    }

    /// Returns the adjusted exponent: the power of ten of the leading digit.
    pub fn exponent(&self) -> Exponent {
        self.e + self.precision() as Exponent - 1
    }

    /// Returns the number scaled by a power of ten into the range [1, 10) (or zero).
    pub fn mantissa(&self) -> Self {
        BigDecimal::new(self.m.clone(), 1 - self.precision() as Exponent)
    }

    /// Exclusive upper digit position: |self| < 10^top.
    pub(crate) fn top(&self) -> Exponent {
        self.e + self.precision() as Exponent
    }

    /// Returns the negated number.
    pub fn neg(&self) -> Self {
        BigDecimal::new(-&self.m, self.e)
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        BigDecimal::new(self.m.abs(), self.e)
    }

    /// Multiplies the number by 10^n.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the resulting exponent is out of range.
    pub fn move_point(&self, n: Exponent) -> Result<Self, Error> {
        Ok(BigDecimal::new(self.m.clone(), exp_add(self.e, n)?))
    }

    /// Returns the same value with trailing zeroes of the coefficient removed.
    pub fn normalize(&self) -> Self {
        if self.m.is_zero() {
            return BigDecimal::zero();
        }
        let ten = BigInt::from(10);
        let mut m = self.m.clone();
        let mut e = self.e;
        loop {
            let (q, r) = m.div_rem(&ten);
            if !r.is_zero() {
                break;
            }
            m = q;
            e += 1;
        }
        BigDecimal::new(m, e)
    }

    /// Exact sum.
    ///
    /// The mantissa of the result spans both operands, so its length grows with the difference
    /// of their exponents: adding 1 and 1e-1000000000 allocates a billion-digit integer.
    /// Use [`BigDecimal::add`] when the result is rounded anyway, it does not depend on the difference.
    pub fn add_full_prec(&self, d2: &Self) -> Self {
        if self.is_zero() {
            return d2.clone();
        }
        if d2.is_zero() {
            return self.clone();
        }
        match self.e.cmp(&d2.e) {
            Ordering::Equal => BigDecimal::new(&self.m + &d2.m, self.e),
            Ordering::Greater => {
                let m1 = scale_up(&self.m, (self.e - d2.e) as u64);
                BigDecimal::new(m1 + &d2.m, d2.e)
            }
            Ordering::Less => {
                let m2 = scale_up(&d2.m, (d2.e - self.e) as u64);
                BigDecimal::new(&self.m + m2, self.e)
            }
        }
    }

    /// Exact difference. The cost is the same as of [`BigDecimal::add_full_prec`].
    pub fn sub_full_prec(&self, d2: &Self) -> Self {
        self.add_full_prec(&d2.neg())
    }

    /// Exact product.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the resulting exponent is out of range.
    pub fn mul_full_prec(&self, d2: &Self) -> Result<Self, Error> {
        if self.is_zero() || d2.is_zero() {
            return Ok(BigDecimal::zero());
        }
        Ok(BigDecimal::new(&self.m * &d2.m, exp_add(self.e, d2.e)?))
    }

    /// Adds `d2` to `self` and rounds the result using `mc`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the resulting exponent is out of range.
    pub fn add(&self, d2: &Self, mc: MathContext) -> Result<Self, Error> {
        if mc.is_unlimited() {
            return Ok(self.add_full_prec(d2));
        }
        if self.is_zero() {
            return Ok(d2.round(mc));
        }
        if d2.is_zero() {
            return Ok(self.round(mc));
        }

        let (big, small) = if self.top() >= d2.top() { (self, d2) } else { (d2, self) };

        // An operand lying entirely below every digit of the other operand and below its
        // rounding position only matters through its sign: replace it with a unit at that level.
        let g = big.e.min(exp_sub(big.top(), mc.precision() as Exponent + 2)?);
        let sum = if small.top() <= g {
            let unit = BigDecimal::new(BigInt::from(small.signum()), exp_sub(g, 1)?);
            big.add_full_prec(&unit)
        } else {
            big.add_full_prec(small)
        };

        Ok(sum.round(mc))
    }

    /// Subtracts `d2` from `self` and rounds the result using `mc`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the resulting exponent is out of range.
    pub fn sub(&self, d2: &Self, mc: MathContext) -> Result<Self, Error> {
        self.add(&d2.neg(), mc)
    }

    /// Multiplies `self` by `d2` and rounds the result using `mc`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the resulting exponent is out of range.
    pub fn mul(&self, d2: &Self, mc: MathContext) -> Result<Self, Error> {
        Ok(self.mul_full_prec(d2)?.round(mc))
    }

    /// Divides `self` by `d2` and rounds the result using `mc`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    ///  - ExponentOverflow: the resulting exponent is out of range.
    pub fn div(&self, d2: &Self, mc: MathContext) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }
        mc.check_finite()?;
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }

        let p = mc.precision() as u64;
        let da = self.precision();
        let db = d2.precision();

        // the integer quotient gets at least p + 2 digits.
        let shift = (p + 2 + db).saturating_sub(da);
        let num = self.m.magnitude() * pow10(shift);
        let (mut q, r) = num.div_rem(d2.m.magnitude());

        let mut e = exp_sub(exp_sub(self.e, d2.e)?, digits_to_exp(shift)?)?;
        if !r.is_zero() {
            // sticky digit
            q = q * 10u32 + 1u32;
            e = exp_sub(e, 1)?;
        }

        let neg = self.is_negative() != d2.is_negative();
        let (q, e) = round_mag(q, e, neg, mc.precision(), mc.rounding_mode());

        Ok(BigDecimal::new(make_int(neg, q), e))
    }

    /// Returns 1/self rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn reciprocal(&self, mc: MathContext) -> Result<Self, Error> {
        BigDecimal::one().div(self, mc)
    }

    /// Rounds the number to the precision of `mc` using its rounding mode.
    pub fn round(&self, mc: MathContext) -> Self {
        if mc.is_unlimited() || self.precision() <= mc.precision() as u64 {
            return self.clone();
        }

        let neg = self.is_negative();
        let (q, e) = round_mag(
            self.m.magnitude().clone(),
            self.e,
            neg,
            mc.precision(),
            mc.rounding_mode(),
        );

        BigDecimal::new(make_int(neg, q), e)
    }

    /// Returns the integral part of the number (truncation towards zero).
    pub fn integral_part(&self) -> Self {
        if self.e >= 0 {
            self.clone()
        } else if self.top() <= 0 {
            BigDecimal::zero()
        } else {
            let d = BigInt::from(pow10((-self.e) as u64));
            BigDecimal::new(&self.m / d, 0)
        }
    }

    /// Returns the fractional part of the number. It has the sign of the number.
    pub fn fractional_part(&self) -> Self {
        self.sub_full_prec(&self.integral_part())
    }

    /// Returns true if the number has no fractional part.
    pub fn is_integer(&self) -> bool {
        if self.e >= 0 || self.is_zero() {
            true
        } else if self.top() <= 0 {
            false
        } else {
            let d = BigInt::from(pow10((-self.e) as u64));
            (&self.m % d).is_zero()
        }
    }

    /// Converts the number to `i64` if it is an integer in the range of `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        if self.is_zero() {
            return Some(0);
        }
        if self.e >= 0 {
            if self.top() > 19 {
                return None;
            }
            (&self.m * BigInt::from(pow10(self.e as u64))).to_i64()
        } else {
            self.integral_part().m.to_i64()
        }
    }

    /// Converts the number to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        let d = self.precision();
        let s = if d > 20 {
            let m = &self.m / BigInt::from(pow10(d - 20));
            format!("{}e{}", m, self.e.saturating_add((d - 20) as Exponent))
        } else {
            format!("{}e{}", self.m, self.e)
        };
        s.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Returns true if the number can be approximated by a normal `f64` value.
    pub fn is_f64_range(&self) -> bool {
        self.is_zero() || (-300..300).contains(&self.exponent())
    }

    #[cfg(feature = "random")]
    /// Returns a random number with `p` significant digits and the adjusted exponent in the range
    /// from `exp_from` to `exp_to` inclusive. The sign can be positive and negative. Zero is excluded.
    /// Function does not follow any specific distribution law.
    /// The intended use of this function is for testing.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: `p` is zero.
    ///  - Domain: `exp_from` is greater than `exp_to`.
    pub fn random_normal(p: usize, exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        if p == 0 {
            return Err(Error::UnlimitedPrecision);
        }

        if exp_from > exp_to {
            return Err(Error::Domain("random_normal for exp_from > exp_to"));
        }

        let mut digits = String::with_capacity(p);
        digits.push(char::from(b'1' + rand::random::<u8>() % 9));
        for _ in 1..p {
            digits.push(char::from(b'0' + rand::random::<u8>() % 10));
        }

        let m: BigInt = digits.parse().map_err(|_| Error::MalformedInput)?;
        let m = if rand::random::<u8>() & 1 == 0 { m } else { -m };

        let span = exp_to.wrapping_sub(exp_from) as u64;
        let adj = if span == u64::MAX {
            rand::random::<i64>()
        } else {
            exp_from.wrapping_add((rand::random::<u64>() % (span + 1)) as i64)
        };
        let e = exp_sub(adj, p as Exponent - 1)?;

        Ok(BigDecimal::new(m, e))
    }
}

impl From<i64> for BigDecimal {
    fn from(v: i64) -> Self {
        BigDecimal::from_i64(v)
    }
}

impl From<i32> for BigDecimal {
    fn from(v: i32) -> Self {
        BigDecimal::from_i64(v as i64)
    }
}

impl From<u64> for BigDecimal {
    fn from(v: u64) -> Self {
        BigDecimal::from_u64(v)
    }
}

impl From<BigInt> for BigDecimal {
    fn from(v: BigInt) -> Self {
        BigDecimal::new(v, 0)
    }
}

impl PartialEq for BigDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let s1 = self.signum();
        let s2 = other.signum();
        if s1 != s2 {
            return s1.cmp(&s2);
        }
        if s1 == 0 {
            return Ordering::Equal;
        }

        let t1 = self.top();
        let t2 = other.top();
        let ord = if t1 != t2 {
            t1.cmp(&t2)
        } else {
            // same number of integer digits, the exponent difference is bounded by the precision.
            let (m1, m2) = match self.e.cmp(&other.e) {
                Ordering::Equal => (self.m.magnitude().clone(), other.m.magnitude().clone()),
                Ordering::Greater => (
                    self.m.magnitude() * pow10((self.e - other.e) as u64),
                    other.m.magnitude().clone(),
                ),
                Ordering::Less => (
                    self.m.magnitude().clone(),
                    other.m.magnitude() * pow10((other.e - self.e) as u64),
                ),
            };
            m1.cmp(&m2)
        };

        if s1 > 0 {
            ord
        } else {
            ord.reverse()
        }
    }
}

fn scale_up(m: &BigInt, n: u64) -> BigInt {
    m * BigInt::from(pow10(n))
}

fn make_int(neg: bool, mag: BigUint) -> BigInt {
    BigInt::from_biguint(if neg { IntSign::Minus } else { IntSign::Plus }, mag)
}

/// Rounds magnitude `mag * 10^e` of a number with sign `neg` to `p` digits.
fn round_mag(mag: BigUint, e: Exponent, neg: bool, p: usize, rm: RoundingMode) -> (BigUint, Exponent) {
    let digits = decimal_digits(&mag);
    if p == 0 || digits <= p as u64 {
        return (mag, e);
    }

    let drop = digits - p as u64;
    let divisor = pow10(drop);
    let (mut q, r) = mag.div_rem(&divisor);

    let inc = !r.is_zero()
        && match rm {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !neg,
            RoundingMode::Floor => neg,
            RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => {
                let half = &divisor >> 1u32;
                match r.cmp(&half) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => match rm {
                        RoundingMode::HalfUp => true,
                        RoundingMode::HalfDown => false,
                        _ => q.is_odd(),
                    },
                }
            }
            RoundingMode::ZeroFiveUp => {
                let d = (&q % 10u32).to_u32().unwrap_or(1);
                d == 0 || d == 5
            }
        };

    let mut e = e + drop as Exponent;
    if inc {
        q += 1u32;
        if decimal_digits(&q) > p as u64 {
            q /= 10u32;
            e += 1;
        }
    }

    (q, e)
}
