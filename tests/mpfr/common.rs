//! Components used in MPFR integration tests

use astro_decimal::{BigDecimal, Exponent, MathContext, RoundingMode};
use rand::random;
use rug::Float;

macro_rules! test_astro_op {
    ($n1:ident, $n2:ident, $astro_op:ident, $f1:ident, $f2:ident, $mpfr_op:ident, $mc:ident, $op_info:expr, $cc:ident) => {
        let n3 = BigDecimal::$astro_op(&($n1), &($n2), $mc, &$cc).unwrap();

        let f3 = ($f1).clone().$mpfr_op(&($f2));

        assert_decimal_close(&n3, &f3, $mc, &format!("{:?}", $op_info));
    };
    ($n1:ident, $astro_op:ident, $f1:ident, $mpfr_op:ident, $mc:ident, $op_info:expr) => {
        let n3 = BigDecimal::$astro_op(&($n1), $mc).unwrap();

        let f3 = ($f1).clone().$mpfr_op();

        // println!("\n{}\n{}", $n1, $f1.to_string_radix(10, None));
        // println!("\n{}\n{}", n3, f3.to_string_radix(10, None));

        assert_decimal_close(&n3, &f3, $mc, &format!("{:?}", $op_info));
    };
    ($n1:ident, $astro_op:ident, $f1:ident, $mpfr_op:ident, $mc:ident, $op_info:expr, $cc:ident) => {
        let n3 = BigDecimal::$astro_op(&($n1), $mc, &$cc).unwrap();

        let f3 = ($f1).clone().$mpfr_op();

        // println!("\n{}\n{}", $n1, $f1.to_string_radix(10, None));
        // println!("\n{}\n{}", n3, f3.to_string_radix(10, None));

        assert_decimal_close(&n3, &f3, $mc, &format!("{:?}", $op_info));
    };
}

// test constant value match
macro_rules! test_astro_const {
    ($astro_const:ident, $f1:expr, $mc:ident, $op_info:expr, $cc:ident) => {
        let n1: BigDecimal = $cc.$astro_const($mc).unwrap();

        assert_decimal_close(&n1, &($f1), $mc, &format!("{:?}", $op_info));
    };
}

pub(crate) use test_astro_const;
pub(crate) use test_astro_op;

/// Number of extra decimal digits MPFR computes the reference value with.
pub const REF_GUARD: usize = 20;

pub const fn get_prec_rng() -> usize {
    #[cfg(not(debug_assertions))]
    {
        300
    }

    #[cfg(debug_assertions)]
    {
        40
    }
}

/// Binary precision of MPFR numbers used as reference for decimal precision `p`.
pub fn mpfr_prec(p: usize) -> u32 {
    ((p + REF_GUARD) * 10 / 3 + 64) as u32
}

pub fn get_decimal_pair(p: usize, emin: Exponent, emax: Exponent, p_ref: usize) -> (BigDecimal, Float) {
    let n = BigDecimal::random_normal(p, emin, emax).unwrap();
    let f = conv_to_mpfr(p_ref, &n);
    (n, f)
}

pub fn conv_to_mpfr(p_ref: usize, n: &BigDecimal) -> Float {
    let (m, e) = n.to_raw_parts();
    let s = format!("{}e{}", m, e);
    Float::with_val(mpfr_prec(p_ref), Float::parse(&s).unwrap())
}

pub fn conv_from_mpfr(p: usize, f: &Float) -> BigDecimal {
    f.to_string_radix(10, Some(p + REF_GUARD)).parse().unwrap()
}

// assert the decimal value differs from the reference not more than 1 ulp,
// and directed rounding modes round in the right direction.
pub fn assert_decimal_close(n: &BigDecimal, f: &Float, mc: MathContext, op: &str) {
    let p = mc.precision();
    let r = conv_from_mpfr(p, f);

    assert!(
        n.precision() as usize <= p,
        "{}: result {} has more than {} digits",
        op,
        n,
        p
    );

    if r.is_zero() {
        assert!(n.is_zero(), "{}: {} is not zero", op, n);
        return;
    }

    let ulp = BigDecimal::one().move_point(r.exponent() - p as Exponent + 1).unwrap();
    let d = n.sub_full_prec(&r);

    assert!(d.abs() <= ulp, "{}: {} differs from {}", op, n, r);

    // the reference itself is not exact.
    let tol = BigDecimal::one().move_point(r.exponent() - p as Exponent - 1).unwrap();
    let dir_ok = match mc.rounding_mode() {
        RoundingMode::Floor => d <= tol,
        RoundingMode::Ceiling => d >= tol.neg(),
        RoundingMode::Down => n.abs() <= r.abs().add_full_prec(&tol),
        RoundingMode::Up => n.abs() >= r.abs().sub_full_prec(&tol),
        RoundingMode::ZeroFiveUp => true,
        _ => d.abs() <= ulp.mul_full_prec(&"0.51".parse().unwrap()).unwrap(),
    };

    assert!(dir_ok, "{}: {} is rounded wrongly with {:?}, reference {}", op, n, mc.rounding_mode(), r);
}

pub fn get_random_rm() -> RoundingMode {
    match random::<u8>() % 8 {
        0 => RoundingMode::Up,
        1 => RoundingMode::Down,
        2 => RoundingMode::Ceiling,
        3 => RoundingMode::Floor,
        4 => RoundingMode::HalfUp,
        5 => RoundingMode::HalfDown,
        6 => RoundingMode::HalfEven,
        7 => RoundingMode::ZeroFiveUp,
        _ => unreachable!(),
    }
}

pub fn get_random_mc(p_rng: usize, p_min: usize) -> MathContext {
    let p = random::<usize>() % p_rng + p_min;
    MathContext::new(p, get_random_rm())
}
