//! Compute-once cache of values keyed by precision.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::defs::Error;

/// Requested precisions are rounded up to a multiple of this value.
const BUCKET_SIZE: usize = 32;

/// Digits added on top of the bucket.
const BUCKET_GUARD: usize = 8;

/// Returns the precision actually computed for the requested precision `p`.
pub(crate) fn bucket(p: usize) -> usize {
    (p + BUCKET_SIZE - 1) / BUCKET_SIZE * BUCKET_SIZE + BUCKET_GUARD
}

/// Each precision bucket is computed at most once; concurrent callers of the same bucket
/// wait for the first one and share its value. A value of a larger bucket serves any smaller request.
#[derive(Debug)]
pub(crate) struct PrecisionCache<V> {
    name: &'static str,
    slots: Mutex<BTreeMap<usize, Arc<OnceCell<V>>>>,
}

impl<V: Clone> PrecisionCache<V> {
    pub fn new(name: &'static str) -> Self {
        PrecisionCache {
            name,
            slots: Mutex::new(BTreeMap::new()),
        }
    }

    /// Returns the cached value for precision `p`, computing it with `init` if needed.
    /// `init` receives the bucket precision. A failed computation leaves the slot empty.
    pub fn get_or_try_init<F>(&self, p: usize, init: F) -> Result<V, Error>
    where
        F: FnOnce(usize) -> Result<V, Error>,
    {
        let key = bucket(p);

        let cell = {
            let mut slots = self.slots.lock();
            if let Some(v) = slots.range(key..).find_map(|(_, c)| c.get()) {
                return Ok(v.clone());
            }
            Arc::clone(slots.entry(key).or_default())
        };

        cell.get_or_try_init(|| {
            debug!("computing {} with precision {}", self.name, key);
            init(key)
        })
        .cloned()
    }

    /// Returns the number of computed buckets.
    #[cfg(test)]
    pub fn computed(&self) -> usize {
        self.slots.lock().values().filter(|c| c.get().is_some()).count()
    }
}
