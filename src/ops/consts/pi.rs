//! π number

use num_bigint::BigInt;

use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigDecimal;

/// Digits contributed by one term of the Chudnovsky series.
const DIGITS_PER_TERM: usize = 14;

fn pqr(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let r = BigInt::from(6 * b - 5) * (2 * b - 1) * (6 * b - 1);
        let q = BigInt::from(10939058860032000u64) * b * b * b;
        let mut p = &r * (13591409 + 545140134 * b);

        if b & 1 != 0 {
            p = -p;
        }

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let r = &ra * rb;
        let q = &qa * &qb;
        let p = pa * qb + pb * ra;

        (p, q, r)
    }
}

/// Computes pi with precision `p` using the Chudnovsky algorithm with binary splitting.
pub(crate) fn compute_pi(p: usize) -> Result<BigDecimal, Error> {
    let n = (p / DIGITS_PER_TERM) as u64 + 2;
    let (pk, qk, _) = pqr(0, n);

    // q*4270934400 / ((p + q*13591409) * sqrt(10005))
    let mc = MathContext::new(p + 4, RoundingMode::HalfEven);
    let num = BigDecimal::from(&qk * 4270934400u64);
    let den = BigDecimal::from(pk + qk * 13591409u64);
    let f = BigDecimal::from_u64(10005).sqrt(mc)?;
    let den = den.mul(&f, mc)?;

    let ret = num.div(&den, mc)?;

    Ok(ret.round(MathContext::new(p, RoundingMode::HalfEven)))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pi_const() {
        let pi = compute_pi(30).unwrap();
        assert_eq!(pi, "3.14159265358979323846264338328".parse::<BigDecimal>().unwrap());

        let pi = compute_pi(1).unwrap();
        assert_eq!(pi, BigDecimal::from_i64(3));
    }
}
