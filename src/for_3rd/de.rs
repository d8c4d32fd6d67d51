//! Deserialization of BigDecimal.

use core::fmt::Formatter;

use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

use crate::num::BigDecimal;

pub struct BigDecimalVisitor {}

impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigDecimalVisitor {})
    }
}

impl<'de> Visitor<'de> for BigDecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "except `String`, `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from_i64(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        BigDecimal::from_f64(v).map_err(|e| Error::custom(format!("{e}")))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<BigDecimal>()
            .map_err(|e| Error::custom(format!("{e}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
