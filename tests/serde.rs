//! Serialization of decimal numbers through serde_json.

use std::collections::BTreeMap;

use astro_decimal::{BigDecimal, Consts, MathContext, RoundingMode};
use serde_json::{from_str, from_value, json, to_string};

#[test]
fn serde_roundtrip_computed() {
    let cc = Consts::new();
    let mc = MathContext::new(50, RoundingMode::HalfEven);

    let v = vec![
        cc.pi(mc).unwrap(),
        BigDecimal::from_i64(2).sqrt(mc).unwrap(),
        BigDecimal::from_i64(-3).exp(mc).unwrap(),
    ];

    let s = to_string(&v).unwrap();
    let back: Vec<BigDecimal> = from_str(&s).unwrap();

    assert_eq!(v, back);
    assert_eq!(
        s,
        "[\"3.1415926535897932384626433832795028841971693993751\",\
          \"1.4142135623730950488016887242096980785696718753769\",\
          \"0.049787068367863942979342415650061776631699592188423\"]"
    );
}

#[test]
fn serde_json_values() {
    let v = json!({ "a": 1, "b": -2.5, "c": "1.000E+100" });

    let m: BTreeMap<String, BigDecimal> = from_value(v).unwrap();

    assert_eq!(m["a"], BigDecimal::from_i64(1));
    assert_eq!(m["b"], "-2.5".parse().unwrap());
    assert_eq!(m["c"].exponent(), 100);
    assert_eq!(m["c"].precision(), 4);

    assert!(from_str::<BigDecimal>("\"abc\"").is_err());
    assert!(from_str::<BigDecimal>("true").is_err());
}
