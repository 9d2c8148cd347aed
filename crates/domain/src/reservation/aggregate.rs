//! Reservation aggregate implementation.

use common::{BlockId, ReservationId, SessionId};
use serde::{Deserialize, Serialize};

use crate::calendar;

use super::state::ReservationStatus;
use super::value_objects::{
    AccommodationBlock, Basics, BasicsUpdate, BillingDetails, BillingUpdate, BlockUpdate,
    HeadCount, LegUpdate, MealsState, MealsUpdate, RoomAllocation, TrainingSession, TrainingUpdate,
    TransportLeg,
};

/// Delegation reservation aggregate root.
///
/// Owns the full wizard state plus the process flags and is the only
/// place mutations happen. Every mutation is total: it never fails, and
/// it re-derives all dependent cross-field invariants before returning.
/// The arrival leg is authoritative for the departure leg's
/// type/location/transfer fields; the departure leg may diverge only on
/// date, time, persons and flight number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    basics: Basics,
    accommodation: Vec<AccommodationBlock>,
    arrival: TransportLeg,
    departure: TransportLeg,
    meals: MealsState,
    training: Vec<TrainingSession>,
    billing: BillingDetails,
    status: ReservationStatus,
    agreed_to_terms: bool,
    is_loading: bool,
    error: Option<String>,
}

impl Reservation {
    /// Creates a fresh draft reservation with a new identity.
    pub fn new() -> Self {
        Self {
            id: ReservationId::new(),
            basics: Basics::default(),
            accommodation: Vec::new(),
            arrival: TransportLeg::default(),
            departure: TransportLeg::default(),
            meals: MealsState::default(),
            training: Vec::new(),
            billing: BillingDetails::default(),
            status: ReservationStatus::Draft,
            agreed_to_terms: false,
            is_loading: false,
            error: None,
        }
    }
}

impl Default for Reservation {
    fn default() -> Self {
        Self::new()
    }
}

// Query methods
impl Reservation {
    /// Returns the reservation identity.
    pub fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the team basics.
    pub fn basics(&self) -> &Basics {
        &self.basics
    }

    /// Returns all accommodation blocks.
    pub fn accommodation(&self) -> &[AccommodationBlock] {
        &self.accommodation
    }

    /// Returns a block by ID.
    pub fn block(&self, id: BlockId) -> Option<&AccommodationBlock> {
        self.accommodation.iter().find(|block| block.id == id)
    }

    /// Returns the arrival leg.
    pub fn arrival(&self) -> &TransportLeg {
        &self.arrival
    }

    /// Returns the departure leg.
    pub fn departure(&self) -> &TransportLeg {
        &self.departure
    }

    /// Returns the catering state.
    pub fn meals(&self) -> &MealsState {
        &self.meals
    }

    /// Returns all training sessions.
    pub fn training(&self) -> &[TrainingSession] {
        &self.training
    }

    /// Returns a training session by ID.
    pub fn training_session(&self, id: SessionId) -> Option<&TrainingSession> {
        self.training.iter().find(|session| session.id == id)
    }

    /// Returns the billing details.
    pub fn billing(&self) -> &BillingDetails {
        &self.billing
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns true if the terms were agreed to.
    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }

    /// Returns true while a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the last submission error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// Mutations
impl Reservation {
    /// Applies a partial update to the team basics.
    ///
    /// Setting the country code also overwrites the billing country,
    /// unconditionally.
    pub fn update_basics(&mut self, update: BasicsUpdate) {
        if let Some(federation) = update.federation {
            self.basics.federation = federation;
        }
        if let Some(code) = update.country_code {
            self.billing.country = code.clone();
            self.basics.country_code = code;
        }
        if let Some(name) = update.team_name {
            self.basics.team_name = name;
        }
        if let Some(person) = update.contact_person {
            self.basics.contact_person = person;
        }
        if let Some(email) = update.contact_email {
            self.basics.contact_email = email;
        }
        if let Some(phone) = update.contact_phone {
            self.basics.contact_phone = phone;
        }
    }

    /// Sets the headcount, clamping players to 14 and staff to 5; the
    /// total is recomputed, never set.
    pub fn set_head_count(&mut self, players: u8, staff: u8) {
        self.basics.head_count = HeadCount::new(players, staff);
    }

    /// Sets the stay range; parseable dates are clamped into the
    /// authorized event window, malformed input is kept verbatim.
    pub fn set_stay(&mut self, arrival: impl Into<String>, departure: impl Into<String>) {
        self.basics.stay.arrival = calendar::clamp_to_window(&arrival.into());
        self.basics.stay.departure = calendar::clamp_to_window(&departure.into());
    }

    /// Adds an empty accommodation block, returning its ID.
    pub fn add_accommodation_block(&mut self) -> BlockId {
        let block = AccommodationBlock::new();
        let id = block.id;
        self.accommodation.push(block);
        id
    }

    /// Applies a partial update to a block; unknown IDs are a no-op.
    pub fn update_accommodation_block(&mut self, id: BlockId, update: BlockUpdate) {
        let Some(block) = self.accommodation.iter_mut().find(|block| block.id == id) else {
            return;
        };
        if let Some(hotel) = update.hotel {
            block.hotel = hotel;
        }
        if let Some(check_in) = update.check_in {
            block.check_in = check_in;
        }
        if let Some(check_out) = update.check_out {
            block.check_out = check_out;
        }
    }

    /// Removes a block; unknown IDs are a no-op.
    pub fn remove_accommodation_block(&mut self, id: BlockId) {
        self.accommodation.retain(|block| block.id != id);
    }

    /// Upserts the room count for one capacity within a block.
    ///
    /// An existing entry for the capacity has its count replaced; other
    /// capacities in the block are untouched. Capacity is clamped to the
    /// 1–4 range the hotels offer.
    pub fn set_room_count(&mut self, id: BlockId, capacity: u8, count: u32) {
        let Some(block) = self.accommodation.iter_mut().find(|block| block.id == id) else {
            return;
        };
        let capacity = capacity.clamp(1, 4);
        match block.rooms.iter_mut().find(|room| room.capacity == capacity) {
            Some(room) => room.count = count,
            None => block.rooms.push(RoomAllocation { capacity, count }),
        }
    }

    /// Applies a partial update to the arrival leg, then mirrors
    /// type/location/transfer onto the departure leg.
    pub fn update_arrival_leg(&mut self, update: LegUpdate) {
        if let Some(kind) = update.kind {
            self.arrival.kind = kind;
        }
        if let Some(date) = update.date {
            self.arrival.date = date;
        }
        if let Some(time) = update.time {
            self.arrival.time = time;
        }
        if let Some(location) = update.location {
            self.arrival.location = location;
        }
        if let Some(flight_number) = update.flight_number {
            self.arrival.flight_number = flight_number;
        }
        if let Some(persons) = update.persons {
            self.arrival.persons = persons;
        }
        if let Some(transfer) = update.airport_transfer {
            self.arrival.airport_transfer = transfer;
        }
        self.sync_departure_from_arrival();
    }

    /// Applies a partial update to the departure leg.
    ///
    /// The departure leg can never locally diverge on type, location or
    /// transfer: those are re-asserted from the arrival leg first, and
    /// only date/time/persons/flight number are taken from the update.
    pub fn update_departure_leg(&mut self, update: LegUpdate) {
        self.sync_departure_from_arrival();
        if let Some(date) = update.date {
            self.departure.date = date;
        }
        if let Some(time) = update.time {
            self.departure.time = time;
        }
        if let Some(flight_number) = update.flight_number {
            self.departure.flight_number = flight_number;
        }
        if let Some(persons) = update.persons {
            self.departure.persons = persons;
        }
    }

    fn sync_departure_from_arrival(&mut self) {
        self.departure.kind = self.arrival.kind;
        self.departure.location = self.arrival.location.clone();
        self.departure.airport_transfer = self.arrival.airport_transfer;
    }

    /// Applies a partial update to catering.
    ///
    /// The meal plan is fixed; add-ons are mutually exclusive and the
    /// later selection within one update wins.
    pub fn update_meals(&mut self, update: MealsUpdate) {
        if let Some(count) = update.vegetarian {
            self.meals.dietary.vegetarian = count;
        }
        if let Some(count) = update.vegan {
            self.meals.dietary.vegan = count;
        }
        if let Some(count) = update.gluten_free {
            self.meals.dietary.gluten_free = count;
        }
        if let Some(other) = update.other {
            self.meals.dietary.other = other;
        }
        if let Some(on) = update.lunch_package {
            self.meals.addons.set_lunch_package(on);
        }
        if let Some(on) = update.hot_lunch {
            self.meals.addons.set_hot_lunch(on);
        }
    }

    /// Adds a training session, returning its ID. Slots are floored at
    /// one.
    pub fn add_training_session(&mut self, date: impl Into<String>, slots: u32) -> SessionId {
        let session = TrainingSession::new(date, slots);
        let id = session.id;
        self.training.push(session);
        id
    }

    /// Applies a partial update to a session; unknown IDs are a no-op.
    pub fn update_training_session(&mut self, id: SessionId, update: TrainingUpdate) {
        let Some(session) = self.training.iter_mut().find(|session| session.id == id) else {
            return;
        };
        if let Some(date) = update.date {
            session.date = date;
        }
        if let Some(slots) = update.slots {
            session.slots = slots.max(1);
        }
    }

    /// Removes a session; unknown IDs are a no-op.
    pub fn remove_training_session(&mut self, id: SessionId) {
        self.training.retain(|session| session.id != id);
    }

    /// Applies a partial update to billing, then re-asserts the billing
    /// country from the team's country code.
    pub fn update_billing(&mut self, update: BillingUpdate) {
        if let Some(company) = update.company_name {
            self.billing.company_name = company;
        }
        if let Some(address) = update.address {
            self.billing.address = address;
        }
        if let Some(city) = update.city {
            self.billing.city = city;
        }
        if let Some(postal_code) = update.postal_code {
            self.billing.postal_code = postal_code;
        }
        if let Some(vat_id) = update.vat_id {
            self.billing.vat_id = vat_id;
        }
        if let Some(email) = update.billing_email {
            self.billing.billing_email = email;
        }
        if !self.basics.country_code.is_empty() {
            self.billing.country = self.basics.country_code.clone();
        }
    }

    /// Records the terms-agreement checkbox.
    pub fn set_agreed_to_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
    }

    /// Discards all state and starts a new draft reservation.
    pub fn reset(&mut self) {
        *self = Reservation::new();
    }
}

// Submission process state, driven by the service.
impl Reservation {
    pub(crate) fn begin_submission(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub(crate) fn complete_submission(&mut self) {
        self.status = ReservationStatus::Submitted;
        self.is_loading = false;
        self.error = None;
    }

    pub(crate) fn fail_submission(&mut self, message: String) {
        self.error = Some(message);
        self.is_loading = false;
        self.status = ReservationStatus::Draft;
    }

    pub(crate) fn restore_id(&mut self, id: ReservationId) {
        self.id = id;
    }

    pub(crate) fn restore_status(&mut self, status: ReservationStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::value_objects::TransportType;

    #[test]
    fn new_reservation_is_an_empty_draft() {
        let reservation = Reservation::new();
        assert_eq!(reservation.status(), ReservationStatus::Draft);
        assert!(!reservation.agreed_to_terms());
        assert!(!reservation.is_loading());
        assert!(reservation.error().is_none());
        assert!(reservation.accommodation().is_empty());
        assert_eq!(reservation.basics().head_count.total(), 0);
    }

    #[test]
    fn head_count_clamps_and_recomputes_total() {
        let mut reservation = Reservation::new();

        reservation.set_head_count(20, 9);
        assert_eq!(reservation.basics().head_count.players(), 14);
        assert_eq!(reservation.basics().head_count.staff(), 5);
        assert_eq!(reservation.basics().head_count.total(), 19);

        reservation.set_head_count(10, 3);
        assert_eq!(reservation.basics().head_count.total(), 13);
    }

    #[test]
    fn country_code_update_overwrites_billing_country() {
        let mut reservation = Reservation::new();
        reservation.update_billing(BillingUpdate {
            company_name: Some("Czech Floorball".to_string()),
            ..BillingUpdate::default()
        });

        reservation.update_basics(BasicsUpdate {
            country_code: Some("CZE".to_string()),
            ..BasicsUpdate::default()
        });

        assert_eq!(reservation.billing().country, "CZE");

        reservation.update_basics(BasicsUpdate {
            country_code: Some("SVK".to_string()),
            ..BasicsUpdate::default()
        });
        assert_eq!(reservation.billing().country, "SVK");
    }

    #[test]
    fn billing_update_cannot_diverge_country() {
        let mut reservation = Reservation::new();
        reservation.update_basics(BasicsUpdate {
            country_code: Some("AUT".to_string()),
            ..BasicsUpdate::default()
        });

        // billing updates have no country field, and the mirror is
        // re-asserted after every billing mutation
        reservation.update_billing(BillingUpdate {
            city: Some("Wien".to_string()),
            ..BillingUpdate::default()
        });

        assert_eq!(reservation.billing().country, "AUT");
        assert_eq!(reservation.billing().city, "Wien");
    }

    #[test]
    fn stay_dates_are_clamped_into_the_event_window() {
        let mut reservation = Reservation::new();
        reservation.set_stay("2026-10-01", "2026-12-01");
        assert_eq!(reservation.basics().stay.arrival, "2026-10-13");
        assert_eq!(reservation.basics().stay.departure, "2026-10-21");

        reservation.set_stay("2026-10-16", "not-a-date");
        assert_eq!(reservation.basics().stay.arrival, "2026-10-16");
        assert_eq!(reservation.basics().stay.departure, "not-a-date");
    }

    #[test]
    fn arrival_type_location_transfer_propagate_to_departure() {
        let mut reservation = Reservation::new();

        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Plane),
            location: Some("PRG".to_string()),
            airport_transfer: Some(true),
            date: Some("2026-10-13".to_string()),
            ..LegUpdate::default()
        });

        assert_eq!(reservation.departure().kind, TransportType::Plane);
        assert_eq!(reservation.departure().location, "PRG");
        assert!(reservation.departure().airport_transfer);
        // only the mirrored fields propagate
        assert_eq!(reservation.departure().date, "");
    }

    #[test]
    fn departure_updates_cannot_diverge_mirrored_fields() {
        let mut reservation = Reservation::new();
        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Plane),
            location: Some("PRG".to_string()),
            airport_transfer: Some(true),
            ..LegUpdate::default()
        });

        reservation.update_departure_leg(LegUpdate {
            kind: Some(TransportType::Bus),
            location: Some("VIE".to_string()),
            airport_transfer: Some(false),
            date: Some("2026-10-21".to_string()),
            time: Some("16:40".to_string()),
            flight_number: Some("OK 537".to_string()),
            persons: Some(19),
        });

        // mirrored fields re-asserted from arrival
        assert_eq!(reservation.departure().kind, TransportType::Plane);
        assert_eq!(reservation.departure().location, "PRG");
        assert!(reservation.departure().airport_transfer);
        // leg-local fields applied
        assert_eq!(reservation.departure().date, "2026-10-21");
        assert_eq!(reservation.departure().time, "16:40");
        assert_eq!(reservation.departure().flight_number, "OK 537");
        assert_eq!(reservation.departure().persons, 19);
    }

    #[test]
    fn departure_resync_uses_current_arrival_values() {
        let mut reservation = Reservation::new();
        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Plane),
            location: Some("PRG".to_string()),
            ..LegUpdate::default()
        });
        reservation.update_arrival_leg(LegUpdate {
            location: Some("VIE".to_string()),
            ..LegUpdate::default()
        });

        reservation.update_departure_leg(LegUpdate {
            date: Some("2026-10-21".to_string()),
            ..LegUpdate::default()
        });

        assert_eq!(reservation.departure().location, "VIE");
    }

    #[test]
    fn meal_addons_are_exclusive_through_the_aggregate() {
        let mut reservation = Reservation::new();

        reservation.update_meals(MealsUpdate {
            lunch_package: Some(true),
            ..MealsUpdate::default()
        });
        reservation.update_meals(MealsUpdate {
            hot_lunch: Some(true),
            ..MealsUpdate::default()
        });

        assert!(reservation.meals().addons.hot_lunch());
        assert!(!reservation.meals().addons.lunch_package());

        reservation.update_meals(MealsUpdate {
            lunch_package: Some(true),
            ..MealsUpdate::default()
        });
        assert!(reservation.meals().addons.lunch_package());
        assert!(!reservation.meals().addons.hot_lunch());
    }

    #[test]
    fn room_count_upsert_replaces_only_the_given_capacity() {
        let mut reservation = Reservation::new();
        let id = reservation.add_accommodation_block();

        reservation.set_room_count(id, 2, 6);
        reservation.set_room_count(id, 1, 1);
        reservation.set_room_count(id, 2, 4);

        let block = reservation.block(id).unwrap();
        assert_eq!(block.rooms.len(), 2);
        let doubles = block.rooms.iter().find(|r| r.capacity == 2).unwrap();
        let singles = block.rooms.iter().find(|r| r.capacity == 1).unwrap();
        assert_eq!(doubles.count, 4);
        assert_eq!(singles.count, 1);
    }

    #[test]
    fn room_capacity_is_clamped_to_offered_range() {
        let mut reservation = Reservation::new();
        let id = reservation.add_accommodation_block();

        reservation.set_room_count(id, 0, 2);
        reservation.set_room_count(id, 9, 3);

        let block = reservation.block(id).unwrap();
        assert!(block.rooms.iter().any(|r| r.capacity == 1 && r.count == 2));
        assert!(block.rooms.iter().any(|r| r.capacity == 4 && r.count == 3));
    }

    #[test]
    fn mutations_on_unknown_ids_are_no_ops() {
        let mut reservation = Reservation::new();
        let before = reservation.clone();

        reservation.set_room_count(BlockId::new(), 2, 6);
        reservation.remove_accommodation_block(BlockId::new());
        reservation.update_accommodation_block(BlockId::new(), BlockUpdate::default());
        reservation.update_training_session(SessionId::new(), TrainingUpdate::default());
        reservation.remove_training_session(SessionId::new());

        assert_eq!(reservation, before);
    }

    #[test]
    fn training_sessions_keep_at_least_one_slot() {
        let mut reservation = Reservation::new();
        let id = reservation.add_training_session("2026-10-14", 0);
        assert_eq!(reservation.training_session(id).unwrap().slots, 1);

        reservation.update_training_session(
            id,
            TrainingUpdate {
                slots: Some(0),
                ..TrainingUpdate::default()
            },
        );
        assert_eq!(reservation.training_session(id).unwrap().slots, 1);
    }

    #[test]
    fn reset_starts_a_new_draft_with_a_new_identity() {
        let mut reservation = Reservation::new();
        let old_id = reservation.id();
        reservation.update_basics(BasicsUpdate {
            team_name: Some("Finland".to_string()),
            ..BasicsUpdate::default()
        });
        reservation.set_agreed_to_terms(true);
        reservation.complete_submission();

        reservation.reset();

        assert_ne!(reservation.id(), old_id);
        assert_eq!(reservation.status(), ReservationStatus::Draft);
        assert!(reservation.basics().team_name.is_empty());
        assert!(!reservation.agreed_to_terms());
    }

    #[test]
    fn failed_submission_keeps_draft_and_message() {
        let mut reservation = Reservation::new();
        reservation.begin_submission();
        assert!(reservation.is_loading());
        assert!(reservation.error().is_none());

        reservation.fail_submission("quota exceeded".to_string());
        assert!(!reservation.is_loading());
        assert_eq!(reservation.error(), Some("quota exceeded"));
        assert_eq!(reservation.status(), ReservationStatus::Draft);
    }
}
