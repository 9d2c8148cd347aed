//! In-memory registry implementation for testing.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use common::ReservationId;

use crate::error::{RegistryError, Result};
use crate::request::{DelegationRecord, DelegationRequest};
use crate::store::DelegationRegistry;

#[derive(Debug, Default)]
struct InMemoryState {
    records: HashMap<ReservationId, DelegationRecord>,
    fail_with: Option<String>,
}

/// In-memory registry for tests and local development.
///
/// Stores records in a map and can be configured to reject the next
/// submissions with a fixed message.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryRegistry {
    /// Creates a new empty in-memory registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the registry to reject create calls with the given
    /// message, or to accept them again when `None`.
    pub fn set_fail_with(&self, message: Option<String>) {
        self.state.write().unwrap().fail_with = message;
    }

    /// Returns the number of stored delegations.
    pub fn record_count(&self) -> usize {
        self.state.read().unwrap().records.len()
    }

    /// Returns true if a delegation exists with the given ID.
    pub fn has_delegation(&self, id: ReservationId) -> bool {
        self.state.read().unwrap().records.contains_key(&id)
    }
}

#[async_trait]
impl DelegationRegistry for InMemoryRegistry {
    async fn create_delegation(&self, request: DelegationRequest) -> Result<DelegationRecord> {
        let mut state = self.state.write().unwrap();

        if let Some(message) = &state.fail_with {
            return Err(RegistryError::rejected(message.clone()));
        }

        let record = DelegationRecord {
            id: ReservationId::new(),
            status: "submitted".to_string(),
            submitted_at: Some(Utc::now()),
            request,
        };
        state.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_delegation(&self, id: ReservationId) -> Result<Option<DelegationRecord>> {
        Ok(self.state.read().unwrap().records.get(&id).cloned())
    }
}
