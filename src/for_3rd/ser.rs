//! Serialization of BigDecimal.
//! Serialization to a string uses the plain or scientific decimal form.

use serde::{Serialize, Serializer};

use crate::num::BigDecimal;

impl Serialize for BigDecimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
