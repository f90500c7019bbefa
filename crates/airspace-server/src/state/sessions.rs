//! Render-cycle session store.
//!
//! Every filter change renders one batch and files it under a fresh token.
//! Map clicks carry that token back, so the detail panel always resolves
//! against the exact records that were drawn.

use airspace_core::FlightRecord;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The batch behind one rendered map.
#[derive(Debug, Clone)]
pub struct RenderedBatch {
    pub flights: Arc<Vec<FlightRecord>>,
    pub rendered_at: Instant,
}

impl RenderedBatch {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self {
            flights: Arc::new(flights),
            rendered_at: Instant::now(),
        }
    }

    pub fn find(&self, flight_id: &str) -> Option<&FlightRecord> {
        self.flights.iter().find(|flight| flight.flight_id == flight_id)
    }
}

pub struct SessionStore {
    batches: DashMap<String, RenderedBatch>,
    max_entries: usize,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            batches: DashMap::new(),
            max_entries: max_entries.max(1),
            ttl,
        }
    }

    /// File a rendered batch under a new token and return the token.
    pub fn insert(&self, batch: RenderedBatch) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.batches.insert(token.clone(), batch);
        self.prune();
        token
    }

    pub fn get(&self, token: &str) -> Option<RenderedBatch> {
        let batch = self.batches.get(token)?.value().clone();
        if batch.rendered_at.elapsed() > self.ttl {
            self.batches.remove(token);
            return None;
        }
        Some(batch)
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Drop expired batches, then the oldest ones beyond capacity.
    pub fn prune(&self) {
        let now = Instant::now();
        let mut entries: Vec<(String, Instant)> = self
            .batches
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().rendered_at))
            .collect();

        entries.retain(|(token, rendered_at)| {
            let expired = now.duration_since(*rendered_at) > self.ttl;
            if expired {
                self.batches.remove(token);
            }
            !expired
        });

        if self.batches.len() <= self.max_entries {
            return;
        }

        entries.sort_by_key(|(_, rendered_at)| *rendered_at);
        let excess = self.batches.len().saturating_sub(self.max_entries);
        for (token, _) in entries.into_iter().take(excess) {
            self.batches.remove(&token);
        }
        tracing::debug!(evicted = excess, "pruned render sessions over capacity");
    }
}
