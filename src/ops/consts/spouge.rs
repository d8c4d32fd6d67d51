//! Coefficients of Spouge's approximation of the factorial.

use num_bigint::BigInt;
use num_traits::One;

use crate::common::consts::TWO;
use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigDecimal;
use crate::ops::consts::Consts;

/// Coefficients c0, c1, ..., c(a-1) of Spouge's approximation for parameter `a`.
#[derive(Debug)]
pub(crate) struct SpougeTable {
    a: usize,
    mc: MathContext,
    coeffs: Vec<BigDecimal>,
}

impl SpougeTable {
    /// Spouge's parameter.
    pub fn a(&self) -> usize {
        self.a
    }

    /// Precision the coefficients are computed with.
    pub fn math_context(&self) -> MathContext {
        self.mc
    }

    pub fn coefficients(&self) -> &[BigDecimal] {
        &self.coeffs
    }
}

/// Computes the table for a result with precision `p`.
///
/// c0 = sqrt(2*pi), ck = (-1)^(k-1) * (a-k)^(k-1/2) * e^(a-k) / (k-1)!
pub(crate) fn compute_spouge_table(p: usize, cc: &Consts) -> Result<SpougeTable, Error> {
    let a = (p * 13 + 9) / 10;
    let mc = MathContext::new(a * 15 / 10 + 2, RoundingMode::HalfEven);

    let mut coeffs = Vec::with_capacity(a);

    let c0 = cc.pi(mc)?.mul(&TWO, mc)?.sqrt(mc)?;
    coeffs.push(c0);

    let e = cc.e(mc)?;
    let mut fct = BigInt::one();

    for k in 1..a {
        let ak = (a - k) as i64;
        let akd = BigDecimal::from_i64(ak);

        // (a-k)^(k-1/2) = (a-k)^(k-1) * sqrt(a-k)
        let n0 = akd.powi(k as i64 - 1, mc)?;
        let n1 = n0.mul(&akd.sqrt(mc)?, mc)?;
        let n2 = n1.mul(&e.powi(ak, mc)?, mc)?;
        let mut ck = n2.div(&BigDecimal::from(fct.clone()), mc)?;

        if k % 2 == 0 {
            ck = ck.neg();
        }

        coeffs.push(ck);
        fct *= k;
    }

    Ok(SpougeTable { a, mc, coeffs })
}
