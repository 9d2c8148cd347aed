//! Engine error types.

use registry::RegistryError;
use thiserror::Error;

/// Errors that can occur at the engine boundary.
///
/// Mutations on the reservation itself never fail; errors only arise when
/// talking to the registry or encoding snapshots.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The persistence registry rejected or failed a call.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
