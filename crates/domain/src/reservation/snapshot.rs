//! Cross-session draft snapshot.
//!
//! The host application stores the returned string under [`STORAGE_KEY`]
//! at its own lifecycle points (startup load, on-change save) and feeds
//! it back on the next load. The engine itself makes no storage-backend
//! assumptions.

use crate::error::EngineError;

use super::aggregate::Reservation;

/// Fixed storage key hosts file the snapshot under.
pub const STORAGE_KEY: &str = "delegation-reservation-draft";

/// Serializes the full reservation, process state included.
pub fn serialize(reservation: &Reservation) -> Result<String, EngineError> {
    Ok(serde_json::to_string(reservation)?)
}

/// Restores a reservation serialized by [`serialize`], verbatim.
pub fn deserialize(raw: &str) -> Result<Reservation, EngineError> {
    Ok(serde_json::from_str(raw)?)
}
