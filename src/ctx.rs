//! Precision and rounding configuration.

use crate::defs::RoundingMode;
use crate::defs::DEFAULT_RM;
use crate::num::BigDecimal;
use crate::Consts;
use crate::Error;
use std::sync::Arc;

/// The number of significant digits and the rounding mode of an operation.
///
/// Precision 0 means unlimited precision. Exact operations accept it;
/// transcendental functions and division reject it with [`Error::UnlimitedPrecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MathContext {
    precision: usize,
    rm: RoundingMode,
}

impl MathContext {
    /// 7 digits, rounding half to even.
    pub const DECIMAL32: MathContext = MathContext::new(7, RoundingMode::HalfEven);

    /// 16 digits, rounding half to even.
    pub const DECIMAL64: MathContext = MathContext::new(16, RoundingMode::HalfEven);

    /// 34 digits, rounding half to even.
    pub const DECIMAL128: MathContext = MathContext::new(34, RoundingMode::HalfEven);

    /// Unlimited precision.
    pub const UNLIMITED: MathContext = MathContext::new(0, RoundingMode::HalfUp);

    /// Creates a new context with precision `precision` and rounding mode `rm`.
    pub const fn new(precision: usize, rm: RoundingMode) -> Self {
        MathContext { precision, rm }
    }

    /// Creates a new context with precision `precision` and the default rounding mode.
    pub const fn with_precision(precision: usize) -> Self {
        MathContext::new(precision, DEFAULT_RM)
    }

    /// Returns the precision of the context.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Returns the rounding mode of the context.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns true if the precision is unlimited.
    pub fn is_unlimited(&self) -> bool {
        self.precision == 0
    }

    /// Returns the same context with `guard` additional digits.
    /// Unlimited precision stays unlimited.
    pub fn with_guard(&self, guard: usize) -> Self {
        if self.precision == 0 {
            *self
        } else {
            MathContext::new(self.precision + guard, self.rm)
        }
    }

    /// Returns a context with the same rounding mode and precision `precision`.
    pub fn set_precision(&self, precision: usize) -> Self {
        MathContext::new(precision, self.rm)
    }

    /// Fails with `UnlimitedPrecision` if the precision is unlimited.
    pub(crate) fn check_finite(&self) -> Result<(), Error> {
        if self.precision == 0 {
            Err(Error::UnlimitedPrecision)
        } else {
            Ok(())
        }
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::DECIMAL128
    }
}

/// Context bundles a [`MathContext`] with a shared constants cache.
#[derive(Debug, Clone)]
pub struct Context {
    cc: Arc<Consts>,
    mc: MathContext,
}

impl Context {
    /// Create a new context.
    pub fn new(mc: MathContext, cc: Arc<Consts>) -> Self {
        Context { cc, mc }
    }

    /// Destructures the context and returns its parts.
    pub fn to_raw_parts(self) -> (MathContext, Arc<Consts>) {
        let Context { mc, cc } = self;
        (mc, cc)
    }

    /// Sets the precision and rounding mode of the context.
    pub fn set_math_context(&mut self, mc: MathContext) {
        self.mc = mc;
    }

    /// Returns the precision and rounding mode of the context.
    pub fn math_context(&self) -> MathContext {
        self.mc
    }

    /// Returns a reference to the constants cache of the context.
    pub fn consts(&self) -> &Consts {
        &self.cc
    }

    /// Returns the value of the pi number.
    pub fn const_pi(&self) -> Result<BigDecimal, Error> {
        self.cc.pi(self.mc)
    }

    /// Returns the value of the Euler number.
    pub fn const_e(&self) -> Result<BigDecimal, Error> {
        self.cc.e(self.mc)
    }

    /// Returns the value of the natural logarithm of 2.
    pub fn const_ln2(&self) -> Result<BigDecimal, Error> {
        self.cc.ln_2(self.mc)
    }

    /// Returns the value of the natural logarithm of 10.
    pub fn const_ln10(&self) -> Result<BigDecimal, Error> {
        self.cc.ln_10(self.mc)
    }
}
