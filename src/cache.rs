//! Bounded memoization for the three pure ephemeris functions.
//!
//! The caches are the only process-wide state in the crate. They are pure
//! accelerators: every entry is the deterministic result of its key, so a
//! lock that cannot be taken simply falls back to recomputation and the
//! observable behavior never changes. Timezone offsets enter the keys as
//! raw `f64` bits because results differ across timezones.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lazy_static::lazy_static;
use lru::LruCache;

lazy_static! {
    /// `new_moon(k)` results, keyed by lunation index.
    pub(crate) static ref NEW_MOON: Mutex<LruCache<i64, f64>> =
        Mutex::new(LruCache::new(NonZeroUsize::new(512).unwrap()));

    /// `new_moon_day(k, tz)` results, keyed by `(k, tz.to_bits())`.
    pub(crate) static ref NEW_MOON_DAY: Mutex<LruCache<(i64, u64), i64>> =
        Mutex::new(LruCache::new(NonZeroUsize::new(256).unwrap()));

    /// `lunar_month_11(year, tz)` results, keyed by `(year, tz.to_bits())`.
    pub(crate) static ref MONTH_11: Mutex<LruCache<(i32, u64), i64>> =
        Mutex::new(LruCache::new(NonZeroUsize::new(128).unwrap()));
}

/// Look a key up in `cache`, computing and inserting on a miss.
///
/// Falls back to plain computation when the lock is unavailable.
pub(crate) fn lookup_or_compute<K, V, F>(cache: &Mutex<LruCache<K, V>>, key: K, compute: F) -> V
where
    K: Hash + Eq,
    V: Copy,
    F: FnOnce() -> V,
{
    if let Ok(mut guard) = cache.lock() {
        if let Some(value) = guard.get(&key) {
            return *value;
        }
    }
    let value = compute();
    if let Ok(mut guard) = cache.lock() {
        guard.put(key, value);
    }
    value
}
