//! Wire shapes for the delegation registry.
//!
//! [`DelegationRequest`] is the flat record the engine sends when a
//! reservation is submitted; [`DelegationRecord`] is the stored shape the
//! registry hands back, which the engine can hydrate a reservation from.
//! Every field defaults to its empty/zero equivalent so partially stored
//! records still deserialize.

use chrono::{DateTime, Utc};
use common::ReservationId;
use serde::{Deserialize, Serialize};

/// One room line inside an accommodation request, keyed by capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoomRequest {
    /// Room capacity in persons (1–4).
    pub capacity: u8,

    /// Number of rooms requested at this capacity.
    pub count: u32,
}

/// One accommodation block as sent to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AccommodationRequest {
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    pub rooms: Vec<RoomRequest>,
}

/// One training session as sent to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrainingRequest {
    pub date: String,
    pub slots: u32,
}

/// The flat persistence request built from a reservation at submission.
///
/// Transport legs, meals and billing are flattened into prefixed scalar
/// fields; accommodation and training stay as serialized arrays. The
/// `required_singles`/`required_doubles` counts are derived from the room
/// lines at build time, not stored state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DelegationRequest {
    // Team basics
    pub federation: String,
    pub country_code: String,
    pub team_name: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub players: u8,
    pub staff: u8,
    pub total_persons: u8,
    pub stay_arrival: String,
    pub stay_departure: String,

    // Accommodation
    pub accommodations: Vec<AccommodationRequest>,
    pub required_singles: u32,
    pub required_doubles: u32,

    // Arrival leg
    pub arrival_transport: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub arrival_location: String,
    pub arrival_flight_number: String,
    pub arrival_persons: u8,
    pub arrival_transfer: bool,

    // Departure leg
    pub departure_transport: String,
    pub departure_date: String,
    pub departure_time: String,
    pub departure_location: String,
    pub departure_flight_number: String,
    pub departure_persons: u8,
    pub departure_transfer: bool,

    // Meals
    pub meal_plan: String,
    pub vegetarian: u32,
    pub vegan: u32,
    pub gluten_free: u32,
    pub dietary_other: String,
    pub lunch_package: bool,
    pub hot_lunch: bool,

    // Training
    pub training: Vec<TrainingRequest>,

    // Billing
    pub billing_company: String,
    pub billing_address: String,
    pub billing_city: String,
    pub billing_postal_code: String,
    pub billing_country: String,
    pub billing_vat_id: String,
    pub billing_email: String,

    // Consent
    pub agreed_to_terms: bool,
}

/// A delegation as stored by the registry.
///
/// Same shape as the request plus the registry-assigned identity, the
/// stored lifecycle status and the submission timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegationRecord {
    pub id: ReservationId,
    pub status: String,
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub request: DelegationRequest,
}

impl Default for DelegationRecord {
    fn default() -> Self {
        Self {
            id: ReservationId::new(),
            status: "draft".to_string(),
            submitted_at: None,
            request: DelegationRequest::default(),
        }
    }
}
