//! Auxiliary functions.

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;
use smallvec::SmallVec;

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;

const LOG10_2: f64 = 0.301_029_995_663_981_2;

const POW10_CACHED: usize = 64;

lazy_static::lazy_static! {
    static ref POW10: SmallVec<[BigUint; POW10_CACHED]> = {
        let mut v = SmallVec::new();
        let mut p = BigUint::one();
        for _ in 0..POW10_CACHED {
            v.push(p.clone());
            p *= 10u32;
        }
        v
    };
}

/// Returns 10^n.
pub fn pow10(n: u64) -> BigUint {
    if (n as usize) < POW10_CACHED {
        POW10[n as usize].clone()
    } else {
        let mut ret = POW10[POW10_CACHED - 1].clone();
        let mut rem = n - (POW10_CACHED as u64 - 1);
        // 10^(POW10_CACHED-1) blocks keep the number of big multiplications low.
        while rem >= POW10_CACHED as u64 - 1 {
            ret *= &POW10[POW10_CACHED - 1];
            rem -= POW10_CACHED as u64 - 1;
        }
        ret * &POW10[rem as usize]
    }
}

/// Number of decimal digits of `m`. Zero has one digit.
pub fn decimal_digits(m: &BigUint) -> u64 {
    if m.is_zero() {
        return 1;
    }

    let bits = m.bits();
    let mut est = ((bits - 1) as f64 * LOG10_2) as u64 + 1;

    if est > 1 && *m < pow10(est - 1) {
        est -= 1;
    } else if *m >= pow10(est) {
        est += 1;
    }

    est
}

/// Checked exponent addition.
pub fn exp_add(a: Exponent, b: Exponent) -> Result<Exponent, Error> {
    let s = a
        .checked_add(b)
        .ok_or(Error::ExponentOverflow(if b > 0 { Sign::Pos } else { Sign::Neg }))?;
    check_exponent(s)
}

/// Checked exponent subtraction.
pub fn exp_sub(a: Exponent, b: Exponent) -> Result<Exponent, Error> {
    let s = a
        .checked_sub(b)
        .ok_or(Error::ExponentOverflow(if b < 0 { Sign::Pos } else { Sign::Neg }))?;
    check_exponent(s)
}

/// Makes sure the exponent is within the supported range.
pub fn check_exponent(e: Exponent) -> Result<Exponent, Error> {
    if e > EXPONENT_MAX {
        Err(Error::ExponentOverflow(Sign::Pos))
    } else if e < EXPONENT_MIN {
        Err(Error::ExponentOverflow(Sign::Neg))
    } else {
        Ok(e)
    }
}

/// Converts a digit count into an exponent.
pub fn digits_to_exp(n: u64) -> Result<Exponent, Error> {
    if n > EXPONENT_MAX as u64 {
        Err(Error::ExponentOverflow(Sign::Pos))
    } else {
        Ok(n as Exponent)
    }
}
