//! Definitions.

use core::fmt::Display;

/// An exponent.
pub type Exponent = i64;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = Exponent::MAX / 4;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = Exponent::MIN / 4;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::HalfEven;

/// Default precision used when a fraction is converted to decimal without an explicit context.
pub const DEFAULT_P: usize = 128;

/// Number of significant digits an `f64` seed is trusted for.
pub(crate) const F64_SEED_P: usize = 15;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The argument lies outside of the function's domain.
    Domain(&'static str),

    /// The function needs a finite error bound, but unlimited precision was requested.
    UnlimitedPrecision,

    /// Divizor is zero.
    DivisionByZero,

    /// The literal is not a valid decimal number.
    MalformedInput,

    /// The exponent value becomes greater than the upper limit of the range of exponent values.
    ExponentOverflow(Sign),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Domain(msg) => write!(f, "argument out of domain: {}", msg),
            Error::UnlimitedPrecision => f.write_str("unlimited precision is not supported"),
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::MalformedInput => f.write_str("invalid decimal syntax"),
            Error::ExponentOverflow(s) => {
                if s.is_positive() {
                    f.write_str("positive overflow")
                } else {
                    f.write_str("negative overflow")
                }
            }
        }
    }
}

/// Rounding modes.
///
/// The modes follow the General Decimal Arithmetic rounding model.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,

    /// Round towards zero (truncation).
    Down,

    /// Round towards positive infinity.
    Ceiling,

    /// Round towards negative infinity.
    Floor,

    /// Round to nearest; if equidistant, round away from zero.
    HalfUp,

    /// Round to nearest; if equidistant, round towards zero.
    HalfDown,

    /// Round to nearest; if equidistant, round so that the final digit is even.
    HalfEven,

    /// The same as [`RoundingMode::Down`], except that rounding away from zero occurs
    /// if the last kept digit is 0 or 5.
    ZeroFiveUp,
}

impl Default for RoundingMode {
    fn default() -> Self {
        DEFAULT_RM
    }
}

impl RoundingMode {
    /// Returns all rounding modes.
    pub fn all() -> [RoundingMode; 8] {
        [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::Ceiling,
            RoundingMode::Floor,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
            RoundingMode::ZeroFiveUp,
        ]
    }
}
