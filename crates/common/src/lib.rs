//! Shared types for the delegation registration system.

mod types;

pub use types::{BlockId, ReservationId, SessionId};
