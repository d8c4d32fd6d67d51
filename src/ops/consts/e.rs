//! Euler's number

use num_bigint::BigInt;
use num_traits::One;

use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigDecimal;

// p/q = sum(1/((a+1)*(a+2)*...*k)), k = a+1 .. b
fn pq(a: u64, b: u64) -> (BigInt, BigInt) {
    if a == b - 1 {
        (BigInt::one(), BigInt::from(b))
    } else {
        let m = (a + b) / 2;

        let (pa, qa) = pq(a, m);
        let (pb, qb) = pq(m, b);

        let p = pa * &qb + pb;
        let q = qa * qb;

        (p, q)
    }
}

// the smallest n such that n! > 10^(p+2).
fn n_terms(p: usize) -> u64 {
    let mut n = 1u64;
    let mut digits = 0.0f64;
    while digits <= (p + 2) as f64 {
        n += 1;
        digits += (n as f64).log10();
    }
    n
}

/// Computes e with precision `p` by binary splitting of the series 1 + 1/1! + 1/2! + ...
pub(crate) fn compute_e(p: usize) -> Result<BigDecimal, Error> {
    let (pk, qk) = pq(0, n_terms(p));

    // 1 + pk / qk
    let mc = MathContext::new(p + 2, RoundingMode::HalfEven);
    let f = BigDecimal::from(pk).div(&BigDecimal::from(qk), mc)?;
    let ret = f.add(&BigDecimal::one(), mc)?;

    Ok(ret.round(MathContext::new(p, RoundingMode::HalfEven)))
}
