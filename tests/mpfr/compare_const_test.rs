//! This test suite performs comparison of mpfr constants and astro-decimal constants.

use crate::mpfr::common::get_prec_rng;
use crate::mpfr::common::test_astro_const;
use crate::mpfr::common::{assert_decimal_close, get_random_mc, mpfr_prec};
use astro_decimal::{BigDecimal, Consts};
use rug::float::Constant;
use rug::Float;

// constants computation
#[test]
fn mpfr_compare_const() {
    let repeat_cnt = 20;
    let run_cnt = 100;

    let p_rng = get_prec_rng() * 4;
    let p_min = 1;

    for _ in 0..repeat_cnt {
        let cc = Consts::new();

        for _ in 0..run_cnt {
            let mc = get_random_mc(p_rng, p_min);
            let bits = mpfr_prec(mc.precision());

            test_astro_const!(pi, Float::with_val(bits, Constant::Pi), mc, (mc, "pi"), cc);
            test_astro_const!(e, Float::with_val(bits, 1).exp(), mc, (mc, "e"), cc);
            test_astro_const!(ln_2, Float::with_val(bits, Constant::Log2), mc, (mc, "ln 2"), cc);
            test_astro_const!(ln_3, Float::with_val(bits, 3).ln(), mc, (mc, "ln 3"), cc);
            test_astro_const!(ln_10, Float::with_val(bits, 10).ln(), mc, (mc, "ln 10"), cc);
        }
    }
}

// a cache shared between threads returns the same values.
#[test]
fn mpfr_compare_const_shared() {
    use std::sync::Arc;

    let cc = Arc::new(Consts::new());
    let p_rng = get_prec_rng();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cc = cc.clone();
            std::thread::spawn(move || {
                for _ in 0..20 {
                    let mc = get_random_mc(p_rng, 1);
                    let bits = mpfr_prec(mc.precision());
                    let pi: BigDecimal = cc.pi(mc).unwrap();
                    assert_decimal_close(&pi, &Float::with_val(bits, Constant::Pi), mc, "pi");
                    let l2: BigDecimal = cc.ln_2(mc).unwrap();
                    assert_decimal_close(&l2, &Float::with_val(bits, Constant::Log2), mc, "ln 2");
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
