//! Static constants.

use crate::num::BigDecimal;
use lazy_static::lazy_static;

lazy_static! {

    /// 0
    pub(crate) static ref ZERO: BigDecimal = BigDecimal::from_i64(0);

    /// 1
    pub(crate) static ref ONE: BigDecimal = BigDecimal::from_i64(1);

    /// 2
    pub(crate) static ref TWO: BigDecimal = BigDecimal::from_i64(2);

    /// 0.5
    pub(crate) static ref ONE_HALF: BigDecimal = BigDecimal::new(5.into(), -1);

    /// 0.1
    pub(crate) static ref ONE_TENTH: BigDecimal = BigDecimal::new(1.into(), -1);

    /// 256
    pub(crate) static ref C256: BigDecimal = BigDecimal::from_i64(256);

    /// 0.707107, slightly above 1/sqrt(2)
    pub(crate) static ref ASIN_SWITCH: BigDecimal = BigDecimal::new(707107.into(), -6);

    /// 0.785, slightly below pi/4
    pub(crate) static ref QUARTER_PI_LOWER_BOUND: BigDecimal = BigDecimal::new(785.into(), -3);
}
