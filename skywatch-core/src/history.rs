use tracing::debug;

/// Bounded, deduplicated list of successfully searched city names,
/// most-recent-first.
///
/// Duplicate adds are silently ignored: an existing entry keeps its position
/// and is not promoted to the front. When an insert pushes the list past
/// capacity, the oldest (tail) entry is evicted. Names compare
/// case-sensitively, so "Paris" and "paris" are distinct entries.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl SearchHistory {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a city name at the front, unless it is already present.
    pub fn record(&mut self, city: &str) {
        if self.entries.iter().any(|entry| entry == city) {
            debug!(city, "search history already contains entry, skipping");
            return;
        }

        self.entries.insert(0, city.to_string());
        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop();
            debug!(city, ?evicted, "search history at capacity, evicted oldest");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Owned snapshot of the current history, most-recent-first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_inserts_most_recent_first() {
        let mut history = SearchHistory::new(5);
        history.record("Kyiv");
        history.record("Lviv");
        history.record("Odesa");

        assert_eq!(history.entries(), vec!["Odesa", "Lviv", "Kyiv"]);
    }

    #[test]
    fn duplicate_record_is_ignored_without_promotion() {
        let mut history = SearchHistory::new(5);
        history.record("Kyiv");
        history.record("Lviv");
        history.record("Kyiv");

        // "Kyiv" stays where it was; length stays at 2.
        assert_eq!(history.entries(), vec!["Lviv", "Kyiv"]);
    }

    #[test]
    fn duplicate_of_sole_entry_keeps_length_one() {
        let mut history = SearchHistory::new(5);
        history.record("Paris");
        history.record("Paris");

        assert_eq!(history.len(), 1);
        assert_eq!(history.entries(), vec!["Paris"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut history = SearchHistory::new(5);
        history.record("Paris");
        history.record("paris");

        assert_eq!(history.entries(), vec!["paris", "Paris"]);
    }

    #[test]
    fn capacity_overflow_evicts_oldest() {
        let mut history = SearchHistory::new(3);
        for city in ["Kyiv", "Lviv", "Odesa", "Dnipro"] {
            history.record(city);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.entries(), vec!["Dnipro", "Odesa", "Lviv"]);
    }

    #[test]
    fn recording_k_plus_one_distinct_names_keeps_k_most_recent() {
        let capacity = SearchHistory::DEFAULT_CAPACITY;
        let mut history = SearchHistory::default();

        let names: Vec<String> = (0..=capacity).map(|i| format!("City{i}")).collect();
        for name in &names {
            history.record(name);
        }

        assert_eq!(history.len(), capacity);
        let expected: Vec<String> = names.iter().rev().take(capacity).cloned().collect();
        assert_eq!(history.entries(), expected);
    }

    #[test]
    fn clear_empties_regardless_of_prior_state() {
        let mut history = SearchHistory::new(5);
        history.record("Kyiv");
        history.record("Lviv");

        history.clear();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }

    #[test]
    fn entries_returns_a_defensive_copy() {
        let mut history = SearchHistory::new(5);
        history.record("Kyiv");

        let mut copy = history.entries();
        copy.push("Lviv".to_string());

        assert_eq!(history.entries(), vec!["Kyiv"]);
    }
}
