//! Reservation aggregate and related types.

mod aggregate;
mod costs;
mod service;
pub mod snapshot;
mod state;
mod validation;
mod value_objects;

pub use aggregate::Reservation;
pub use costs::{CostBreakdown, estimate};
pub use service::{GENERIC_SUBMIT_ERROR, ReservationService, build_request, hydrate};
pub use state::ReservationStatus;
pub use validation::{
    WizardStep, all_steps_valid, can_submit, is_step_valid, step_errors, step_warnings,
};
pub use value_objects::{
    AccommodationBlock, Basics, BasicsUpdate, BillingDetails, BillingUpdate, BlockUpdate,
    DietaryCounts, HeadCount, LegUpdate, MAX_DELEGATION, MAX_PLAYERS, MAX_STAFF, MealAddons,
    MealPlan, MealsState, MealsUpdate, Money, RoomAllocation, StayRange, TrainingSession,
    TrainingUpdate, TransportLeg, TransportType,
};
