//! Memoized outcomes of speculative parses.

use std::collections::HashMap;

/// A grammar decision resolved by trying an alternative speculatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// `field = match_query(...)` versus a column starting a comparison.
    AltRelevanceSyntax,
    /// `NESTED(path.*)` versus a scalar `NESTED(...)` call.
    NestedAllFields,
    /// `agg(x) [ORDER BY ...] FILTER (...)` versus a plain aggregate.
    FilteredAggregation,
}

/// Records whether a decision's speculative alternative matched at a token
/// index.
#[derive(Debug, Default)]
pub(crate) struct DecisionCache {
    outcomes: HashMap<(Decision, usize), bool>,
    enabled: bool,
    hits: usize,
}

impl DecisionCache {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            outcomes: HashMap::new(),
            enabled,
            hits: 0,
        }
    }

    pub(crate) fn lookup(&mut self, decision: Decision, index: usize) -> Option<bool> {
        if !self.enabled {
            return None;
        }
        let outcome = self.outcomes.get(&(decision, index)).copied();
        if outcome.is_some() {
            self.hits += 1;
        }
        outcome
    }

    pub(crate) fn record(&mut self, decision: Decision, index: usize, matched: bool) {
        if self.enabled {
            self.outcomes.insert((decision, index), matched);
        }
    }

    /// Number of entries recorded.
    pub(crate) fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of lookups answered from the cache.
    pub(crate) const fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_per_position() {
        let mut cache = DecisionCache::new(true);
        cache.record(Decision::NestedAllFields, 3, false);
        assert_eq!(cache.lookup(Decision::NestedAllFields, 3), Some(false));
        assert_eq!(cache.lookup(Decision::NestedAllFields, 4), None);
        assert_eq!(cache.lookup(Decision::AltRelevanceSyntax, 3), None);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_disabled_cache_never_answers() {
        let mut cache = DecisionCache::new(false);
        cache.record(Decision::FilteredAggregation, 0, true);
        assert_eq!(cache.lookup(Decision::FilteredAggregation, 0), None);
        assert_eq!(cache.len(), 0);
    }
}
