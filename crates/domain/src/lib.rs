//! Delegation reservation engine.
//!
//! The in-memory core of the registration wizard for national delegations:
//! - [`Reservation`] aggregate with its cross-field synchronization rules
//! - pure cost estimation against a mutable [`PricingConfig`]
//! - per-step validation gating forward wizard navigation
//! - the draft → submitted submission coordinator over a
//!   [`registry::DelegationRegistry`]

pub mod calendar;
pub mod error;
pub mod pricing;
pub mod reservation;

pub use error::EngineError;
pub use pricing::{CateringRates, CateringUpdate, DEFAULT_RATE_KEY, PricingConfig, PricingUpdate, RoomRates};
pub use reservation::{
    AccommodationBlock, Basics, BasicsUpdate, BillingDetails, BillingUpdate, BlockUpdate,
    CostBreakdown, DietaryCounts, GENERIC_SUBMIT_ERROR, HeadCount, LegUpdate, MealAddons, MealPlan,
    MealsState, MealsUpdate, Money, Reservation, ReservationService, ReservationStatus,
    RoomAllocation, StayRange, TrainingSession, TrainingUpdate, TransportLeg, TransportType,
    WizardStep, all_steps_valid, build_request, can_submit, estimate, hydrate, is_step_valid,
    snapshot, step_errors, step_warnings,
};
