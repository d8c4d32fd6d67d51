//! Natural logarithms of small integers.

use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigDecimal;

/// Computes ln(`n`) with precision `p`.
pub(crate) fn compute_ln(n: u64, p: usize) -> Result<BigDecimal, Error> {
    BigDecimal::from_u64(n).ln_refine(MathContext::new(p, RoundingMode::HalfEven))
}
