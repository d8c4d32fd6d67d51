mod cache;
mod e;
mod ln;
mod pi;
mod spouge;

use std::sync::Arc;

pub(crate) use cache::PrecisionCache;
pub(crate) use spouge::SpougeTable;

use crate::ctx::MathContext;
use crate::num::BigDecimal;
use crate::ops::consts::e::compute_e;
use crate::ops::consts::ln::compute_ln;
use crate::ops::consts::pi::compute_pi;
use crate::ops::consts::spouge::compute_spouge_table;
use crate::Error;

/// Constants cache contains arbitrary-precision mathematical constants.
///
/// Values are computed on first use for a given precision and kept for the lifetime of the cache.
/// The cache can be shared between threads, e.g. through `Arc`.
#[derive(Debug)]
pub struct Consts {
    pi: PrecisionCache<BigDecimal>,
    e: PrecisionCache<BigDecimal>,
    ln2: PrecisionCache<BigDecimal>,
    ln3: PrecisionCache<BigDecimal>,
    ln10: PrecisionCache<BigDecimal>,
    spouge: PrecisionCache<Arc<SpougeTable>>,
}

/// In an ideal situation, the `Consts` structure is initialized with `Consts::new` only once,
/// and then used where needed.
impl Consts {
    /// Initializes the constants cache.
    pub fn new() -> Self {
        Consts {
            pi: PrecisionCache::new("pi"),
            e: PrecisionCache::new("e"),
            ln2: PrecisionCache::new("ln(2)"),
            ln3: PrecisionCache::new("ln(3)"),
            ln10: PrecisionCache::new("ln(10)"),
            spouge: PrecisionCache::new("spouge coefficients"),
        }
    }

    /// Returns the value of the pi number rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn pi(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        mc.check_finite()?;
        let v = self.pi.get_or_try_init(mc.precision(), compute_pi)?;
        Ok(v.round(mc))
    }

    /// Returns the value of the Euler number rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn e(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        mc.check_finite()?;
        let v = self.e.get_or_try_init(mc.precision(), compute_e)?;
        Ok(v.round(mc))
    }

    /// Returns the value of the natural logarithm of 2 rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn ln_2(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        mc.check_finite()?;
        let v = self.ln2.get_or_try_init(mc.precision(), |p| compute_ln(2, p))?;
        Ok(v.round(mc))
    }

    /// Returns the value of the natural logarithm of 3 rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn ln_3(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        mc.check_finite()?;
        let v = self.ln3.get_or_try_init(mc.precision(), |p| compute_ln(3, p))?;
        Ok(v.round(mc))
    }

    /// Returns the value of the natural logarithm of 10 rounded using `mc`.
    ///
    /// ## Errors
    ///
    ///  - UnlimitedPrecision: the precision of `mc` is unlimited.
    pub fn ln_10(&self, mc: MathContext) -> Result<BigDecimal, Error> {
        mc.check_finite()?;
        let v = self.ln10.get_or_try_init(mc.precision(), |p| compute_ln(10, p))?;
        Ok(v.round(mc))
    }

    /// Returns the coefficients of Spouge's approximation good for precision `p`.
    pub(crate) fn spouge_table(&self, p: usize) -> Result<Arc<SpougeTable>, Error> {
        self.spouge
            .get_or_try_init(p, |p| compute_spouge_table(p, self).map(Arc::new))
    }
}

impl Default for Consts {
    fn default() -> Self {
        Consts::new()
    }
}
