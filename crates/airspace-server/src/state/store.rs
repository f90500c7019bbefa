//! Shared application state: reference tables plus rendered sessions.

use airspace_core::{
    apply_filter, FilteredBatch, FlightFilter, FlightGenerator, FlightRecord, GeneratorError,
    ReferenceData,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::state::sessions::{RenderedBatch, SessionStore};

/// Result of one generate -> filter cycle.
#[derive(Debug, Clone)]
pub struct Render {
    pub token: String,
    pub generated_at: DateTime<Utc>,
    pub filtered: FilteredBatch,
}

/// Why a map click could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMiss {
    /// Token never issued or already pruned
    UnknownRender,
    /// Token valid but no such flight in that render
    UnknownFlight,
}

pub struct AppState {
    config: Config,
    reference: Arc<ReferenceData>,
    sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_reference(config, ReferenceData::builtin())
    }

    pub fn with_reference(config: Config, reference: ReferenceData) -> Self {
        let sessions = SessionStore::new(
            config.session_max_entries,
            Duration::from_secs(config.session_ttl_s),
        );
        Self {
            config,
            reference: Arc::new(reference),
            sessions,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Generate a fresh batch, filter it and remember what was rendered.
    pub fn render(
        &self,
        filter: &FlightFilter,
        now: DateTime<Utc>,
    ) -> Result<Render, GeneratorError> {
        let batch = FlightGenerator::new(&self.reference, self.config.generator()).generate_at(now)?;
        let filtered = apply_filter(&batch, filter, now);
        let token = self
            .sessions
            .insert(RenderedBatch::new(filtered.flights.clone()));

        tracing::debug!(
            token = %token,
            generated = batch.len(),
            shown = filtered.summary.count,
            status = %filter.status,
            airline = %filter.airline,
            "rendered flight batch"
        );

        Ok(Render {
            token,
            generated_at: now,
            filtered,
        })
    }

    /// Resolve a clicked flight against the batch drawn under `token`.
    pub fn select_flight(&self, token: &str, flight_id: &str) -> Result<FlightRecord, SelectionMiss> {
        let batch = self.sessions.get(token).ok_or(SelectionMiss::UnknownRender)?;
        batch
            .find(flight_id)
            .cloned()
            .ok_or(SelectionMiss::UnknownFlight)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
