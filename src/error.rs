//! Internal error types.
//!
//! The public cache API is total: a miss is `None`, a zero-capacity `put` is a
//! no-op. The only failure the crate models is a recency list asked to evict
//! while empty, which `LruCache` never lets happen.

use core::fmt;

/// Returned by [`RecencyList::evict_back`](crate::list::RecencyList::evict_back)
/// when there is no tail entry to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyEvictionError;

impl fmt::Display for EmptyEvictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot evict from an empty recency list")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyEvictionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_empty_eviction_display() {
        assert_eq!(
            EmptyEvictionError.to_string(),
            "cannot evict from an empty recency list"
        );
    }
}
