//! Astro-decimal is a library of arbitrary precision decimal transcendental functions.
//!
//! Numbers are represented by [`BigDecimal`]: an arbitrary precision integer mantissa scaled by a power of 10.
//! Each operation takes a [`MathContext`] which defines the number of significant decimal digits
//! of the result and the rounding mode. Functions which need mathematical constants take a
//! constants cache [`Consts`], which computes pi, e, and logarithms once per precision and can be
//! shared between threads.
//!
//! Transcendental functions are computed with power series evaluated on exact fractions
//! ([`ExactFraction`]), or with Newton refinement of an `f64` seed. Complex numbers
//! are supported by [`BigComplex`].
//!
//! ## Examples
//!
//! ```
//! use astro_decimal::{BigDecimal, Consts, MathContext, RoundingMode};
//!
//! let cc = Consts::new();
//! let mc = MathContext::new(30, RoundingMode::HalfEven);
//!
//! let x: BigDecimal = "2".parse().unwrap();
//! let s = x.sqrt(mc).unwrap();
//!
//! assert_eq!(s.to_string(), "1.41421356237309504880168872421");
//! assert_eq!(cc.pi(mc).unwrap().to_string(), "3.14159265358979323846264338328");
//! ```

#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

mod common;
mod complex;
pub mod ctx;
mod defs;
mod fraction;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::complex::BigComplex;
pub use crate::ctx::Context;
pub use crate::ctx::MathContext;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::fraction::ExactFraction;
pub use crate::num::BigDecimal;
pub use crate::ops::consts::Consts;
pub use crate::ops::series;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
