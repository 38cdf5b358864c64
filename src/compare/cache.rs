//! Lazily computed comparison result

use super::Comparison;

/// Holds the last comparison until a source binding changes
#[derive(Debug, Default)]
pub struct ComparisonCache {
    result: Option<Comparison>,
}

impl ComparisonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a result is cached
    pub fn is_valid(&self) -> bool {
        self.result.is_some()
    }

    /// Drop the cached result; the next access recomputes
    pub fn invalidate(&mut self) {
        self.result = None;
    }

    /// Return the cached result, computing it with `compute` if absent.
    ///
    /// A failed computation leaves the cache empty.
    pub fn get_or_try_insert_with<E, F>(&mut self, compute: F) -> Result<&Comparison, E>
    where
        F: FnOnce() -> Result<Comparison, E>,
    {
        let result = match self.result.take() {
            Some(result) => result,
            None => compute()?,
        };
        Ok(&*self.result.insert(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_records;
    use crate::model::Record;

    #[test]
    fn test_computes_once() {
        let mut cache = ComparisonCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let result = cache
                .get_or_try_insert_with::<(), _>(|| {
                    calls += 1;
                    Ok(compare_records(vec![Record::from(["a"])], Vec::new()))
                })
                .unwrap();
            assert_eq!(result.stats.unique, [1, 0]);
        }

        assert_eq!(calls, 1);
        assert!(cache.is_valid());
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut cache = ComparisonCache::new();
        cache
            .get_or_try_insert_with::<(), _>(|| Ok(compare_records(Vec::new(), Vec::new())))
            .unwrap();

        cache.invalidate();
        assert!(!cache.is_valid());

        let result = cache
            .get_or_try_insert_with::<(), _>(|| Ok(compare_records(Vec::new(), vec![Record::from(["b"])])))
            .unwrap();
        assert_eq!(result.stats.unique, [0, 1]);
    }

    #[test]
    fn test_error_leaves_cache_empty() {
        let mut cache = ComparisonCache::new();
        let err = cache.get_or_try_insert_with(|| Err("boom")).unwrap_err();
        assert_eq!(err, "boom");
        assert!(!cache.is_valid());
    }
}
