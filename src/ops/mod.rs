//! High-level operations on the numbers.

pub mod consts;
pub mod series;

mod acos;
mod acosh;
mod asin;
mod asinh;
mod atan;
mod atanh;
mod cbrt;
mod cos;
mod cosh;
mod gamma;
mod log;
mod pow;
mod refine;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
pub(crate) mod util;
