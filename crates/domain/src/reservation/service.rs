//! Submission coordination and record mapping.
//!
//! The service drives the draft → submitted transition against a
//! [`DelegationRegistry`] and maps between the aggregate and the flat
//! persistence shapes. It trusts its caller to gate on
//! [`can_submit`](super::validation::can_submit) and to prevent
//! re-entrant submissions.

use registry::{
    AccommodationRequest, DelegationRecord, DelegationRegistry, DelegationRequest, RoomRequest,
    TrainingRequest,
};

use crate::error::EngineError;

use super::aggregate::Reservation;
use super::state::ReservationStatus;
use super::value_objects::{
    BasicsUpdate, BillingUpdate, BlockUpdate, LegUpdate, MealsUpdate, TransportType,
};

/// Fallback shown when a registry failure carries no message.
pub const GENERIC_SUBMIT_ERROR: &str = "Submission failed, please try again.";

/// Coordinates reservation submission against a delegation registry.
pub struct ReservationService<R: DelegationRegistry> {
    registry: R,
}

impl<R: DelegationRegistry> ReservationService<R> {
    /// Creates a new service with the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Returns a reference to the underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Submits the current reservation snapshot to the registry.
    ///
    /// On success the reservation becomes `Submitted` (terminal). On
    /// failure it stays a draft with every entered field untouched and
    /// the error message retained for display; a retry re-sends the full
    /// current snapshot.
    #[tracing::instrument(skip(self, reservation), fields(reservation_id = %reservation.id()))]
    pub async fn submit(&self, reservation: &mut Reservation) -> Result<(), EngineError> {
        metrics::counter!("delegation_submissions_total").increment(1);
        reservation.begin_submission();
        let request = build_request(reservation);

        match self.registry.create_delegation(request).await {
            Ok(record) => {
                reservation.complete_submission();
                metrics::counter!("delegation_submissions_succeeded_total").increment(1);
                tracing::info!(record_id = %record.id, "delegation submitted");
                Ok(())
            }
            Err(error) => {
                let mut message = error.to_string();
                if message.trim().is_empty() {
                    message = GENERIC_SUBMIT_ERROR.to_string();
                }
                reservation.fail_submission(message);
                metrics::counter!("delegation_submissions_failed_total").increment(1);
                tracing::warn!(error = %error, "delegation submission failed");
                Err(EngineError::Registry(error))
            }
        }
    }

    /// Loads a stored delegation and hydrates it into a reservation.
    ///
    /// Returns `None` if the registry has no record under the ID.
    #[tracing::instrument(skip(self))]
    pub async fn load(
        &self,
        id: common::ReservationId,
    ) -> Result<Option<Reservation>, EngineError> {
        let record = self.registry.get_delegation(id).await?;
        Ok(record.as_ref().map(hydrate))
    }
}

/// Flattens a reservation into the registry request shape.
///
/// The single/double room requirements are re-derived from the current
/// blocks on every build, never read from stored state.
pub fn build_request(reservation: &Reservation) -> DelegationRequest {
    let basics = reservation.basics();
    let meals = reservation.meals();
    let billing = reservation.billing();
    let arrival = reservation.arrival();
    let departure = reservation.departure();

    let accommodations: Vec<AccommodationRequest> = reservation
        .accommodation()
        .iter()
        .map(|block| AccommodationRequest {
            hotel: block.hotel.clone(),
            check_in: block.check_in.clone(),
            check_out: block.check_out.clone(),
            rooms: block
                .rooms
                .iter()
                .map(|room| RoomRequest {
                    capacity: room.capacity,
                    count: room.count,
                })
                .collect(),
        })
        .collect();

    let room_count_at = |capacity: u8| -> u32 {
        reservation
            .accommodation()
            .iter()
            .flat_map(|block| &block.rooms)
            .filter(|room| room.capacity == capacity)
            .map(|room| room.count)
            .sum()
    };

    DelegationRequest {
        federation: basics.federation.clone(),
        country_code: basics.country_code.clone(),
        team_name: basics.team_name.clone(),
        contact_person: basics.contact_person.clone(),
        contact_email: basics.contact_email.clone(),
        contact_phone: basics.contact_phone.clone(),
        players: basics.head_count.players(),
        staff: basics.head_count.staff(),
        total_persons: basics.head_count.total(),
        stay_arrival: basics.stay.arrival.clone(),
        stay_departure: basics.stay.departure.clone(),

        accommodations,
        required_singles: room_count_at(1),
        required_doubles: room_count_at(2),

        arrival_transport: arrival.kind.as_str().to_string(),
        arrival_date: arrival.date.clone(),
        arrival_time: arrival.time.clone(),
        arrival_location: arrival.location.clone(),
        arrival_flight_number: arrival.flight_number.clone(),
        arrival_persons: arrival.persons,
        arrival_transfer: arrival.airport_transfer,

        departure_transport: departure.kind.as_str().to_string(),
        departure_date: departure.date.clone(),
        departure_time: departure.time.clone(),
        departure_location: departure.location.clone(),
        departure_flight_number: departure.flight_number.clone(),
        departure_persons: departure.persons,
        departure_transfer: departure.airport_transfer,

        meal_plan: meals.plan.as_str().to_string(),
        vegetarian: meals.dietary.vegetarian,
        vegan: meals.dietary.vegan,
        gluten_free: meals.dietary.gluten_free,
        dietary_other: meals.dietary.other.clone(),
        lunch_package: meals.addons.lunch_package(),
        hot_lunch: meals.addons.hot_lunch(),

        training: reservation
            .training()
            .iter()
            .map(|session| TrainingRequest {
                date: session.date.clone(),
                slots: session.slots,
            })
            .collect(),

        billing_company: billing.company_name.clone(),
        billing_address: billing.address.clone(),
        billing_city: billing.city.clone(),
        billing_postal_code: billing.postal_code.clone(),
        billing_country: billing.country.clone(),
        billing_vat_id: billing.vat_id.clone(),
        billing_email: billing.billing_email.clone(),

        agreed_to_terms: reservation.agreed_to_terms(),
    }
}

/// Maps a stored record field-by-field back into reservation state.
///
/// Absent fields were already defaulted when the record deserialized.
/// The record's prior existence implies prior consent, so the terms flag
/// is forced on; the status is taken from the record. Replaying the
/// fields through the regular mutations re-establishes every
/// cross-field invariant on the way in.
pub fn hydrate(record: &DelegationRecord) -> Reservation {
    let request = &record.request;
    let mut reservation = Reservation::new();
    reservation.restore_id(record.id);

    reservation.update_basics(BasicsUpdate {
        federation: Some(request.federation.clone()),
        country_code: Some(request.country_code.clone()),
        team_name: Some(request.team_name.clone()),
        contact_person: Some(request.contact_person.clone()),
        contact_email: Some(request.contact_email.clone()),
        contact_phone: Some(request.contact_phone.clone()),
    });
    reservation.set_head_count(request.players, request.staff);
    reservation.set_stay(request.stay_arrival.clone(), request.stay_departure.clone());

    for accommodation in &request.accommodations {
        let block = reservation.add_accommodation_block();
        reservation.update_accommodation_block(
            block,
            BlockUpdate {
                hotel: Some(accommodation.hotel.clone()),
                check_in: Some(accommodation.check_in.clone()),
                check_out: Some(accommodation.check_out.clone()),
            },
        );
        for room in &accommodation.rooms {
            reservation.set_room_count(block, room.capacity, room.count);
        }
    }

    reservation.update_arrival_leg(LegUpdate {
        kind: Some(TransportType::parse(&request.arrival_transport)),
        date: Some(request.arrival_date.clone()),
        time: Some(request.arrival_time.clone()),
        location: Some(request.arrival_location.clone()),
        flight_number: Some(request.arrival_flight_number.clone()),
        persons: Some(request.arrival_persons),
        airport_transfer: Some(request.arrival_transfer),
    });
    // the mirrored fields re-assert from arrival; only the leg-local
    // fields restore from the record
    reservation.update_departure_leg(LegUpdate {
        date: Some(request.departure_date.clone()),
        time: Some(request.departure_time.clone()),
        flight_number: Some(request.departure_flight_number.clone()),
        persons: Some(request.departure_persons),
        ..LegUpdate::default()
    });

    reservation.update_meals(MealsUpdate {
        vegetarian: Some(request.vegetarian),
        vegan: Some(request.vegan),
        gluten_free: Some(request.gluten_free),
        other: Some(request.dietary_other.clone()),
        lunch_package: Some(request.lunch_package),
        hot_lunch: Some(request.hot_lunch),
    });

    for session in &request.training {
        reservation.add_training_session(session.date.clone(), session.slots);
    }

    reservation.update_billing(BillingUpdate {
        company_name: Some(request.billing_company.clone()),
        address: Some(request.billing_address.clone()),
        city: Some(request.billing_city.clone()),
        postal_code: Some(request.billing_postal_code.clone()),
        vat_id: Some(request.billing_vat_id.clone()),
        billing_email: Some(request.billing_email.clone()),
    });

    reservation.set_agreed_to_terms(true);
    reservation.restore_status(ReservationStatus::parse(&record.status));
    reservation
}
