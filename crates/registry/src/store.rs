//! The registry trait consumed by the engine.

use async_trait::async_trait;
use common::ReservationId;

use crate::request::{DelegationRecord, DelegationRequest};
use crate::Result;

/// External collaborator that persists submitted delegations.
///
/// Implementations decide transport, retries and timeouts; the engine only
/// requires that a failed call surfaces a displayable error.
#[async_trait]
pub trait DelegationRegistry: Send + Sync {
    /// Persists a delegation request, returning the stored record.
    async fn create_delegation(&self, request: DelegationRequest) -> Result<DelegationRecord>;

    /// Loads a previously stored delegation, if it exists.
    async fn get_delegation(&self, id: ReservationId) -> Result<Option<DelegationRecord>>;
}
