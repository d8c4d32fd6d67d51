//! Newton-style refinement with growing working precision.

use log::trace;

use crate::ctx::MathContext;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::F64_SEED_P;
use crate::num::BigDecimal;

/// Refines an approximation of a function value by repeated correction steps.
///
/// The working precision starts at the precision of the seed and grows three times
/// on each iteration until it reaches the target precision plus the guard.
/// Iteration stops when the precision is at its cap and the last step is at most `10^-(p+1)`.
pub(crate) struct Refiner {
    mc: MathContext,
    guard: usize,
}

impl Refiner {
    pub fn new(mc: MathContext, guard: usize) -> Self {
        Refiner { mc, guard }
    }

    /// Runs the refinement from `seed` known to `seed_p` digits.
    /// `step` receives the current approximation and the working context and returns the correction.
    pub fn run<F>(&self, seed: BigDecimal, seed_p: usize, mut step: F) -> Result<BigDecimal, Error>
    where
        F: FnMut(&BigDecimal, MathContext) -> Result<BigDecimal, Error>,
    {
        self.mc.check_finite()?;

        let cap = self.mc.precision() + self.guard;
        let threshold = BigDecimal::new(1.into(), -(self.mc.precision() as i64) - 1);

        let mut p_wrk = seed_p.clamp(1, cap);
        let mut y = seed;
        let mut iters = 0;

        loop {
            p_wrk = (p_wrk * 3).min(cap);
            let mc_wrk = MathContext::new(p_wrk, RoundingMode::HalfEven);

            let delta = step(&y, mc_wrk)?;
            y = y.add(&delta, mc_wrk)?;
            iters += 1;

            if p_wrk == cap && delta.abs() <= threshold {
                break;
            }
        }

        trace!("refinement done after {} iterations at precision {}", iters, cap);

        Ok(y.round(self.mc))
    }
}

/// Picks the seed for a refinement: the `f64` value of `f(x)` when `x` fits into `f64`,
/// or the result of `crude` otherwise. Returns the seed and the number of digits it is trusted for.
pub(crate) fn seed<F, C>(x: &BigDecimal, f: F, crude: C) -> Result<(BigDecimal, usize), Error>
where
    F: FnOnce(f64) -> f64,
    C: FnOnce() -> Result<BigDecimal, Error>,
{
    if x.is_f64_range() {
        let v = f(x.to_f64());
        if v.is_finite() {
            return Ok((BigDecimal::from_f64(v)?, F64_SEED_P));
        }
    }
    Ok((crude()?, 1))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_refiner() {
        // Newton for 1/3: y += y(1 - 3y)
        let three = BigDecimal::from_i64(3);
        let one = BigDecimal::one();
        for p in [1, 10, 50, 300] {
            let mc = MathContext::new(p, RoundingMode::HalfEven);
            let r = Refiner::new(mc, 5)
                .run(BigDecimal::from_f64(0.3).unwrap(), 1, |y, mc| {
                    let e = one.sub(&three.mul(y, mc)?, mc)?;
                    y.mul(&e, mc)
                })
                .unwrap();
            assert_eq!(r, one.div(&three, mc).unwrap());
        }

        assert_eq!(
            Refiner::new(MathContext::UNLIMITED, 5).run(BigDecimal::one(), 1, |_, _| Ok(BigDecimal::zero())),
            Err(Error::UnlimitedPrecision)
        );
    }

    #[test]
    fn test_seed() {
        let (s, p) = seed(&BigDecimal::from_i64(4), f64::sqrt, || Ok(BigDecimal::one())).unwrap();
        assert_eq!(s, BigDecimal::from_i64(2));
        assert_eq!(p, F64_SEED_P);

        let big: BigDecimal = "1e1000".parse().unwrap();
        let (s, p) = seed(&big, f64::sqrt, || Ok(BigDecimal::one())).unwrap();
        assert_eq!(s, BigDecimal::one());
        assert_eq!(p, 1);
    }
}
