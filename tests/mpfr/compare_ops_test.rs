//! This test suite performs comparison of mpfr and astro-decimal.
//! It uses numbers with randomly generated digits.
//! The MPFR result is computed with a higher precision and then compared with the decimal result.

use crate::mpfr::common::get_prec_rng;
use crate::mpfr::common::test_astro_op;
use crate::mpfr::common::{
    assert_decimal_close, conv_to_mpfr, get_decimal_pair, get_random_mc, mpfr_prec,
};
use astro_decimal::{BigDecimal, Consts};
use rand::random;
use rug::ops::Pow;
use rug::Float;

#[test]
fn mpfr_compare_ops() {
    let run_cnt = 100;
    let p_rng = get_prec_rng();
    let p_min = 1;

    run_compare_ops(run_cnt, p_rng, p_min);
}

#[test]
fn mpfr_compare_ops_large() {
    let run_cnt_large = 3;
    let p_rng_large = 1;
    let p_min_large;

    #[cfg(not(debug_assertions))]
    {
        p_min_large = 2000;
    }

    #[cfg(debug_assertions)]
    {
        p_min_large = 300;
    }

    run_compare_ops(run_cnt_large, p_rng_large, p_min_large);
}

fn run_compare_ops(run_cnt: usize, p_rng: usize, p_min: usize) {
    let cc = Consts::new();

    // n1 = -1000..1000: exp, sinh, cosh, tanh, atan, asinh, sin, cos, tan
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let (n1, f1) = get_decimal_pair(p1, -20, 2, mc.precision());

        test_astro_op!(n1, exp, f1, exp, mc, (&n1, mc, "exp"));
        test_astro_op!(n1, sinh, f1, sinh, mc, (&n1, mc, "sinh"));
        test_astro_op!(n1, cosh, f1, cosh, mc, (&n1, mc, "cosh"));
        test_astro_op!(n1, tanh, f1, tanh, mc, (&n1, mc, "tanh"));
        test_astro_op!(n1, atan, f1, atan, mc, (&n1, mc, "atan"), cc);
        test_astro_op!(n1, asinh, f1, asinh, mc, (&n1, mc, "asinh"), cc);
        test_astro_op!(n1, sin, f1, sin, mc, (&n1, mc, "sin"), cc);
        test_astro_op!(n1, cos, f1, cos, mc, (&n1, mc, "cos"), cc);
        test_astro_op!(n1, tan, f1, tan, mc, (&n1, mc, "tan"), cc);
    }

    // n1 = -1.0..1.0: asin, acos, atanh
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let (n1, f1) = get_decimal_pair(p1, -20, -1, mc.precision());

        test_astro_op!(n1, asin, f1, asin, mc, (&n1, mc, "asin"), cc);
        test_astro_op!(n1, acos, f1, acos, mc, (&n1, mc, "acos"), cc);
        test_astro_op!(n1, atanh, f1, atanh, mc, (&n1, mc, "atanh"), cc);
        test_astro_op!(n1, ln_1p, f1, ln_1p, mc, (&n1, mc, "ln_1p"), cc);
    }

    // n1 = 1.0..+inf: acosh
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let n1 = BigDecimal::random_normal(p1, -20, 5)
            .unwrap()
            .abs()
            .add_full_prec(&BigDecimal::one());
        let f1 = conv_to_mpfr(mc.precision(), &n1);

        test_astro_op!(n1, acosh, f1, acosh, mc, (&n1, mc, "acosh"), cc);
    }

    // n1 = 0..+inf: sqrt, cbrt, ln, log2, log10
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let n1 = BigDecimal::random_normal(p1, -1000, 1000).unwrap().abs();
        let f1 = conv_to_mpfr(mc.precision(), &n1);

        test_astro_op!(n1, sqrt, f1, sqrt, mc, (&n1, mc, "sqrt"));
        test_astro_op!(n1, cbrt, f1, cbrt, mc, (&n1, mc, "cbrt"));
        test_astro_op!(n1, ln, f1, ln, mc, (&n1, mc, "ln"), cc);
        test_astro_op!(n1, log2, f1, log2, mc, (&n1, mc, "log2"), cc);
        test_astro_op!(n1, log10, f1, log10, mc, (&n1, mc, "log10"), cc);
    }

    // negative cbrt
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let n1 = BigDecimal::random_normal(p1, -100, 100).unwrap().abs().neg();
        let f1 = conv_to_mpfr(mc.precision(), &n1);

        test_astro_op!(n1, cbrt, f1, cbrt, mc, (&n1, mc, "cbrt"));
    }

    // pow, atan2
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let p2 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let n1 = BigDecimal::random_normal(p1, -5, 5).unwrap().abs();
        let f1 = conv_to_mpfr(mc.precision(), &n1);
        let (n2, f2) = get_decimal_pair(p2, -5, 1, mc.precision());

        test_astro_op!(n1, n2, pow, f1, f2, pow, mc, (&n1, &n2, mc, "pow"), cc);

        let (n1, f1) = get_decimal_pair(p1, -10, 10, mc.precision());

        test_astro_op!(n1, n2, atan2, f1, f2, atan2, mc, (&n1, &n2, mc, "atan2"), cc);
    }

    // n1 = 0..100: gamma
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let n1 = BigDecimal::random_normal(p1, -3, 1).unwrap().abs();
        let f1 = conv_to_mpfr(mc.precision(), &n1);

        test_astro_op!(n1, gamma, f1, gamma, mc, (&n1, mc, "gamma"), cc);
    }

    // integer powers and roots
    for _ in 0..run_cnt {
        let p1 = random::<usize>() % p_rng + p_min;
        let mc = get_random_mc(p_rng, p_min);

        let n1 = BigDecimal::random_normal(p1, -10, 10).unwrap();
        let f1 = conv_to_mpfr(mc.precision(), &n1);
        let k = (random::<u8>() % 40) as i64 - 20;

        let n3 = n1.powi(k, mc).unwrap();
        let f3 = f1.clone().pow(k as i32);
        assert_decimal_close(&n3, &f3, mc, &format!("{:?}", (&n1, k, mc, "powi")));

        let n1 = n1.abs();
        let f1 = f1.abs();
        let k = (random::<u8>() % 10) as i64 + 1;

        let n3 = n1.root(k, mc).unwrap();
        let f3 = f1.root(k as u32);
        assert_decimal_close(&n3, &f3, mc, &format!("{:?}", (&n1, k, mc, "root")));
    }
}

#[test]
fn mpfr_compare_factorial() {
    let cc = Consts::new();
    let p_rng = get_prec_rng();

    for _ in 0..50 {
        let mc = get_random_mc(p_rng, 1);
        let k = random::<u32>() % 3000;

        let n1 = BigDecimal::from_u64(k as u64);
        let n3 = n1.factorial(mc, &cc).unwrap();

        let f3 = Float::with_val(mpfr_prec(mc.precision()), Float::factorial(k));

        assert_decimal_close(&n3, &f3, mc, &format!("{:?}", (k, mc, "factorial")));
    }
}
