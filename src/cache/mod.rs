//! Cache primitives shared by the stores.
//!
//! This module provides the `CacheEntry` wrapper with its staleness
//! predicate, the per-store TTL constants, and the cache key builder for
//! filtered attendance views.

pub mod entry;
pub mod key;

pub use entry::{is_fresh, is_fresh_at, CacheEntry, ATTENDANCE_TTL_MS, DASHBOARD_TTL_MS};
pub use key::cache_key;
