use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Sink for named counter increments.
pub trait MetricsSender: Send + Sync {
    fn increment_counter(&self, name: &str);
}

/// In-process `MetricsSender` that keeps a running count per counter name.
#[derive(Debug, Default)]
pub struct CounterRegistry {
    counters: DashMap<String, AtomicU64>,
}

impl CounterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `name`, zero if it was never incremented.
    pub fn count(&self, name: &str) -> u64 {
        self.counters
            .get(name)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// All counters, ordered by name.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counters
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect()
    }
}

impl MetricsSender for CounterRegistry {
    fn increment_counter(&self, name: &str) {
        let counter = self
            .counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0));
        let value = counter.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("Counter '{}' incremented to {}", name, value);
    }
}
