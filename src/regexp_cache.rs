use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Cache of compiled patterns shared between matcher calls. Metadata patterns
/// repeat heavily across regions, so compiling each once is enough.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            Ok(regex.value().clone())
        } else {
            let entry = self
                .cache
                .entry(pattern.to_string())
                .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
            Ok(entry.value().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegexCache;

    #[test]
    fn caches_compiled_patterns() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"\d{3}").unwrap();
        let second = cache.get_regex(r"\d{3}").unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn reports_invalid_pattern() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex("(").is_err());
    }
}
