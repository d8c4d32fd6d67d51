//! Power series computation appliance.

use log::trace;
use smallvec::SmallVec;

use crate::ctx::MathContext;
use crate::defs::Error;
use crate::fraction::ExactFraction;
use crate::num::BigDecimal;

const MAX_CACHE: usize = 64;

//
// Public part
//

/// Generator of polynomial coefficients.
pub trait PolycoeffGen {
    /// Returns the current coefficient and advances to the next one.
    fn next(&mut self) -> Result<ExactFraction, Error>;
}

/// Generator of the powers of the series argument.
pub trait PowerGen {
    /// Returns the current power of the argument and advances to the next one.
    /// Each advance is one multiplication rounded using `mc`.
    fn next(&mut self, mc: MathContext) -> Result<BigDecimal, Error>;
}

/// Powers x^0, x^1, x^2, ...
#[derive(Debug)]
pub struct XPowN {
    pow: BigDecimal,
    x: BigDecimal,
}

impl XPowN {
    pub fn new(x: &BigDecimal) -> Self {
        XPowN {
            pow: BigDecimal::one(),
            x: x.clone(),
        }
    }
}

impl PowerGen for XPowN {
    fn next(&mut self, mc: MathContext) -> Result<BigDecimal, Error> {
        let next = self.pow.mul(&self.x, mc)?;
        Ok(core::mem::replace(&mut self.pow, next))
    }
}

/// Powers x^0, x^2, x^4, ...
#[derive(Debug)]
pub struct XPowTwoN {
    pow: BigDecimal,
    x2: BigDecimal,
}

impl XPowTwoN {
    pub fn new(x: &BigDecimal) -> Result<Self, Error> {
        Ok(XPowTwoN {
            pow: BigDecimal::one(),
            x2: x.mul_full_prec(x)?,
        })
    }
}

impl PowerGen for XPowTwoN {
    fn next(&mut self, mc: MathContext) -> Result<BigDecimal, Error> {
        let next = self.pow.mul(&self.x2, mc)?;
        Ok(core::mem::replace(&mut self.pow, next))
    }
}

/// Powers x^1, x^3, x^5, ...
#[derive(Debug)]
pub struct XPowTwoNPlusOne {
    pow: BigDecimal,
    x2: BigDecimal,
}

impl XPowTwoNPlusOne {
    pub fn new(x: &BigDecimal) -> Result<Self, Error> {
        Ok(XPowTwoNPlusOne {
            pow: x.clone(),
            x2: x.mul_full_prec(x)?,
        })
    }
}

impl PowerGen for XPowTwoNPlusOne {
    fn next(&mut self, mc: MathContext) -> Result<BigDecimal, Error> {
        let next = self.pow.mul(&self.x2, mc)?;
        Ok(core::mem::replace(&mut self.pow, next))
    }
}

/// Sums `factor(i) * power(i)` for i = 0, 1, 2, ... until the terms become negligible.
///
/// Coefficients are pulled from the generator once and cached, so `factor` never
/// changes a value it has returned before. In pair mode two consecutive terms are
/// combined into one step, which is used for alternating series.
pub struct SeriesCalculator<G: PolycoeffGen, P: PowerGen> {
    coeff_gen: G,
    power_gen: P,
    mc: MathContext,
    in_pairs: bool,
    factors: SmallVec<[ExactFraction; MAX_CACHE]>,
}

impl<G: PolycoeffGen, P: PowerGen> SeriesCalculator<G, P> {
    /// Creates a new calculator. The result of `calculate` is rounded using `mc`.
    pub fn new(coeff_gen: G, power_gen: P, mc: MathContext, in_pairs: bool) -> Self {
        SeriesCalculator {
            coeff_gen,
            power_gen,
            mc,
            in_pairs,
            factors: SmallVec::new(),
        }
    }

    /// Returns the coefficient with index `index`, pulling new coefficients from the generator as needed.
    pub fn factor(&mut self, index: usize) -> Result<&ExactFraction, Error> {
        while self.factors.len() <= index {
            let f = self.coeff_gen.next()?;
            self.factors.push(f);
        }
        Ok(&self.factors[index])
    }

    /// Returns the number of coefficients pulled from the generator so far.
    pub fn generated_count(&self) -> usize {
        self.factors.len()
    }

    /// Computes the sum of the series.
    ///
    /// The summation stops when the magnitude of the last step does not exceed `10^-(p+1)`,
    /// where `p` is the precision of the calculator's context.
    /// In pair mode the last term of the pair must not exceed it either.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of the context is unlimited.
    ///  - ExponentOverflow: the exponent of an intermediate value is out of range.
    pub fn calculate(&mut self) -> Result<BigDecimal, Error> {
        self.mc.check_finite()?;

        let threshold = BigDecimal::new(1.into(), -(self.mc.precision() as i64) - 1);
        let mut sum = BigDecimal::zero();
        let mut i = 0;

        loop {
            let mut step = self.term(i)?;
            i += 1;

            let mut last_small = true;
            if self.in_pairs {
                let t2 = self.term(i)?;
                i += 1;
                last_small = t2.abs() <= threshold;
                step = step.add_full_prec(&t2);
            }

            sum = sum.add_full_prec(&step);

            if last_small && step.abs() <= threshold {
                break;
            }
        }

        trace!("series converged after {} terms at precision {}", i, self.mc.precision());

        Ok(sum.round(self.mc))
    }

    fn term(&mut self, i: usize) -> Result<BigDecimal, Error> {
        let mc = self.mc;
        let power = self.power_gen.next(mc)?;
        let f = self.factor(i)?;
        f.numerator().mul_full_prec(&power)?.div(f.denominator(), mc)
    }
}
