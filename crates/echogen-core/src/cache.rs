//! Bounded LRU cache for accepted generation results.
//!
//! Keys are exact matches over (prompt, task type, ensemble flag); a
//! near-duplicate prompt is a miss. The cache is populated only with
//! validator-accepted output, so a hit can short-circuit every model call.
//! Capacity is fixed at construction; the least recently used entry is
//! evicted on overflow.

use std::collections::{HashMap, VecDeque};

use crate::task::TaskType;

/// Exact-match cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    prompt: String,
    task: TaskType,
    ensemble: bool,
}

impl CacheKey {
    pub fn new(prompt: &str, task: &TaskType, ensemble: bool) -> Self {
        Self {
            prompt: prompt.to_owned(),
            task: task.clone(),
            ensemble,
        }
    }
}

/// LRU map from cache key to accepted result text.
///
/// Not internally synchronised; the orchestrator wraps it in a mutex.
#[derive(Debug)]
pub struct PromptCache {
    capacity: usize,
    map: HashMap<CacheKey, String>,
    // Recency order, least recently used at the front.
    order: VecDeque<CacheKey>,
}

impl PromptCache {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Look up a key, refreshing its recency on a hit.
    pub fn get(&mut self, key: &CacheKey) -> Option<String> {
        let value = self.map.get(key)?.clone();
        self.touch(key);
        Some(value)
    }

    /// Insert an accepted result, evicting the least recently used entry if
    /// the cache is full.
    pub fn insert(&mut self, key: CacheKey, value: String) {
        if self.map.insert(key.clone(), value).is_some() {
            self.touch(&key);
            return;
        }

        self.order.push_back(key);
        if self.map.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.map.remove(&evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_back(k);
            }
        }
    }
}

impl Default for PromptCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(prompt: &str) -> CacheKey {
        CacheKey::new(prompt, &TaskType::DEFAULT, false)
    }

    #[test]
    fn hit_returns_stored_value() {
        let mut cache = PromptCache::new(4);
        cache.insert(key("p"), "result".into());
        assert_eq!(cache.get(&key("p")), Some("result".into()));
    }

    #[test]
    fn ensemble_flag_separates_keys() {
        let mut cache = PromptCache::new(4);
        let task = TaskType::DESIGN;
        cache.insert(CacheKey::new("p", &task, false), "single".into());
        assert!(cache.get(&CacheKey::new("p", &task, true)).is_none());
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = PromptCache::new(2);
        cache.insert(key("a"), "1".into());
        cache.insert(key("b"), "2".into());
        // Touch "a" so "b" becomes the eviction victim.
        cache.get(&key("a"));
        cache.insert(key("c"), "3".into());

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("a")).is_some());
        assert!(cache.get(&key("b")).is_none());
        assert!(cache.get(&key("c")).is_some());
    }

    #[test]
    fn reinsert_updates_value_without_growing() {
        let mut cache = PromptCache::new(2);
        cache.insert(key("a"), "old".into());
        cache.insert(key("a"), "new".into());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key("a")), Some("new".into()));
    }
}
