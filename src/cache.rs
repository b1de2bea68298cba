//! Format code caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::ast::DateFormat;
use crate::error::ParseError;

/// Global cache for parsed format codes.
static CACHE: Mutex<Option<LruCache<String, DateFormat>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a format code, using the cache.
pub fn get_or_parse(format_code: &str) -> Result<DateFormat, ParseError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(fmt) = cache.get(format_code) {
        log::trace!("format cache hit for {:?}", format_code);
        return Ok(fmt.clone());
    }

    let fmt = DateFormat::parse(format_code)?;
    cache.put(format_code.to_string(), fmt.clone());
    Ok(fmt)
}
