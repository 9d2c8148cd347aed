//! Persistence boundary for delegation registrations.
//!
//! The engine never talks to a real backend directly; it goes through the
//! [`DelegationRegistry`] trait. This crate defines that trait, the flat
//! request/record wire shapes, and an in-memory implementation used by
//! tests and local development.

pub mod error;
pub mod memory;
pub mod request;
pub mod store;

pub use common::ReservationId;
pub use error::{RegistryError, Result};
pub use memory::InMemoryRegistry;
pub use request::{AccommodationRequest, DelegationRecord, DelegationRequest, RoomRequest, TrainingRequest};
pub use store::DelegationRegistry;
