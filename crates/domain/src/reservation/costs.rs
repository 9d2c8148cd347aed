//! Cost estimation over a reservation and the current pricing.
//!
//! Estimation is a pure function of its two inputs, recomputed on every
//! call. It never fails: a malformed date or missing rate degrades the
//! affected block, leg or category to a zero contribution.

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::pricing::PricingConfig;

use super::aggregate::Reservation;
use super::value_objects::{Money, TransportLeg, TransportType};

/// Per-category cost estimate for a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    pub accommodation: Money,
    pub meals: Money,
    pub transport: Money,
    pub training: Money,
    pub accreditation: Money,
    pub total: Money,
}

/// Estimates the full cost of a reservation against the given pricing.
pub fn estimate(reservation: &Reservation, pricing: &PricingConfig) -> CostBreakdown {
    let accommodation = accommodation_cost(reservation, pricing);
    let meals = catering_cost(reservation, pricing);
    let transport = transport_cost(reservation, pricing);
    let training = training_cost(reservation, pricing);
    let accreditation = pricing
        .accreditation
        .multiply(reservation.basics().head_count.total() as u32);

    CostBreakdown {
        accommodation,
        meals,
        transport,
        training,
        accreditation,
        total: accommodation + meals + transport + training + accreditation,
    }
}

fn accommodation_cost(reservation: &Reservation, pricing: &PricingConfig) -> Money {
    reservation
        .accommodation()
        .iter()
        .map(|block| {
            // degrade to zero: missing/malformed dates or a fully absent
            // rate table contribute nothing
            let Some(nights) = calendar::days_between(&block.check_in, &block.check_out) else {
                return Money::zero();
            };
            let Some(rates) = pricing.room_rates(&block.hotel) else {
                return Money::zero();
            };
            block
                .rooms
                .iter()
                .map(|room| {
                    rates
                        .per_person(room.capacity)
                        .multiply(room.capacity as u32)
                        .multiply(room.count)
                        .multiply(nights)
                })
                .sum()
        })
        .sum()
}

fn catering_cost(reservation: &Reservation, pricing: &PricingConfig) -> Money {
    let persons = reservation.basics().head_count.total() as u32;
    if persons == 0 {
        return Money::zero();
    }
    let stay = &reservation.basics().stay;
    // degrade to zero on a malformed stay range
    let Some(days) = calendar::days_between(&stay.arrival, &stay.departure) else {
        return Money::zero();
    };

    let meals = reservation.meals();
    let mut cost = pricing
        .catering
        .plan_rate(meals.plan)
        .multiply(persons)
        .multiply(days);
    if meals.addons.lunch_package() {
        cost += pricing.catering.lunch_package.multiply(persons).multiply(days);
    }
    if meals.addons.hot_lunch() {
        cost += pricing.catering.hot_lunch.multiply(persons).multiply(days);
    }
    cost
}

fn transport_cost(reservation: &Reservation, pricing: &PricingConfig) -> Money {
    leg_fee(reservation.arrival(), pricing) + leg_fee(reservation.departure(), pricing)
}

/// Flat fee per leg, independent of headcount: charged only for a plane
/// leg with an airport transfer requested.
fn leg_fee(leg: &TransportLeg, pricing: &PricingConfig) -> Money {
    if leg.kind == TransportType::Plane && leg.airport_transfer {
        pricing.transport_fee(&leg.location)
    } else {
        Money::zero()
    }
}

fn training_cost(reservation: &Reservation, pricing: &PricingConfig) -> Money {
    reservation
        .training()
        .iter()
        .filter(|session| calendar::is_paid_training_date(&session.date))
        .map(|session| pricing.training_slot.multiply(session.slots))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::value_objects::{BasicsUpdate, LegUpdate, MealsUpdate};

    fn delegation_of_13() -> Reservation {
        let mut reservation = Reservation::new();
        reservation.set_head_count(10, 3);
        reservation
    }

    #[test]
    fn accommodation_scenario_hotel_comfort() {
        let mut reservation = delegation_of_13();
        let block = reservation.add_accommodation_block();
        reservation.update_accommodation_block(
            block,
            crate::reservation::value_objects::BlockUpdate {
                hotel: Some("Hotel Comfort Olomouc".to_string()),
                check_in: Some("2026-10-16".to_string()),
                check_out: Some("2026-10-18".to_string()),
            },
        );
        reservation.set_room_count(block, 2, 6);
        reservation.set_room_count(block, 1, 1);

        let costs = estimate(&reservation, &PricingConfig::default());

        // 6×2×100×2 + 1×1×80×2
        assert_eq!(costs.accommodation, Money::from_units(2560));
    }

    #[test]
    fn accommodation_ignores_blocks_with_bad_dates() {
        let mut reservation = delegation_of_13();
        let block = reservation.add_accommodation_block();
        reservation.update_accommodation_block(
            block,
            crate::reservation::value_objects::BlockUpdate {
                hotel: Some("Hotel Comfort Olomouc".to_string()),
                check_in: Some("sometime".to_string()),
                check_out: Some("2026-10-18".to_string()),
            },
        );
        reservation.set_room_count(block, 2, 6);

        let costs = estimate(&reservation, &PricingConfig::default());
        assert_eq!(costs.accommodation, Money::zero());
    }

    #[test]
    fn accommodation_falls_back_to_default_table_and_single_rate() {
        let mut reservation = delegation_of_13();
        let block = reservation.add_accommodation_block();
        reservation.update_accommodation_block(
            block,
            crate::reservation::value_objects::BlockUpdate {
                hotel: Some("Hotel Nowhere".to_string()),
                check_in: Some("2026-10-16".to_string()),
                check_out: Some("2026-10-17".to_string()),
            },
        );
        // default table has no capacity-3 rate, falls back to its single
        // rate of 70
        reservation.set_room_count(block, 3, 1);

        let costs = estimate(&reservation, &PricingConfig::default());
        assert_eq!(costs.accommodation, Money::from_units(3 * 70));
    }

    #[test]
    fn catering_scenario_half_board_with_lunch_package() {
        let mut reservation = delegation_of_13();
        reservation.set_stay("2026-10-16", "2026-10-20");
        reservation.update_meals(MealsUpdate {
            lunch_package: Some(true),
            ..MealsUpdate::default()
        });

        let costs = estimate(&reservation, &PricingConfig::default());

        // 13×30×4 + 13×10×4
        assert_eq!(costs.meals, Money::from_units(2080));
    }

    #[test]
    fn catering_is_zero_without_headcount_or_valid_stay() {
        let mut empty = Reservation::new();
        empty.set_stay("2026-10-16", "2026-10-20");
        assert_eq!(
            estimate(&empty, &PricingConfig::default()).meals,
            Money::zero()
        );

        let mut no_dates = delegation_of_13();
        no_dates.set_stay("", "2026-10-20");
        assert_eq!(
            estimate(&no_dates, &PricingConfig::default()).meals,
            Money::zero()
        );
    }

    #[test]
    fn transport_scenario_two_flat_fees() {
        let mut reservation = delegation_of_13();
        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Plane),
            location: Some("PRG".to_string()),
            airport_transfer: Some(true),
            persons: Some(13),
            ..LegUpdate::default()
        });

        let costs = estimate(&reservation, &PricingConfig::default());
        assert_eq!(costs.transport, Money::from_units(1000));

        // headcount-independent
        reservation.update_arrival_leg(LegUpdate {
            persons: Some(2),
            ..LegUpdate::default()
        });
        let costs = estimate(&reservation, &PricingConfig::default());
        assert_eq!(costs.transport, Money::from_units(1000));
    }

    #[test]
    fn transport_needs_plane_and_transfer() {
        let mut reservation = delegation_of_13();
        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Bus),
            location: Some("PRG".to_string()),
            airport_transfer: Some(true),
            ..LegUpdate::default()
        });
        assert_eq!(
            estimate(&reservation, &PricingConfig::default()).transport,
            Money::zero()
        );

        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Plane),
            airport_transfer: Some(false),
            ..LegUpdate::default()
        });
        assert_eq!(
            estimate(&reservation, &PricingConfig::default()).transport,
            Money::zero()
        );
    }

    #[test]
    fn training_scenario_counts_only_paid_dates() {
        let mut reservation = delegation_of_13();
        reservation.add_training_session("2026-10-14", 3);
        reservation.add_training_session("2026-10-16", 5);

        let costs = estimate(&reservation, &PricingConfig::default());
        assert_eq!(costs.training, Money::from_units(150));
    }

    #[test]
    fn accreditation_is_charged_per_person_regardless_of_other_state() {
        let reservation = delegation_of_13();
        let costs = estimate(&reservation, &PricingConfig::default());
        assert_eq!(costs.accreditation, Money::from_units(13 * 25));
    }

    #[test]
    fn estimate_is_pure_and_total_is_the_category_sum() {
        let mut reservation = delegation_of_13();
        reservation.set_stay("2026-10-16", "2026-10-20");
        reservation.update_basics(BasicsUpdate {
            country_code: Some("CZE".to_string()),
            ..BasicsUpdate::default()
        });
        reservation.update_arrival_leg(LegUpdate {
            kind: Some(TransportType::Plane),
            location: Some("PRG".to_string()),
            airport_transfer: Some(true),
            ..LegUpdate::default()
        });
        reservation.add_training_session("2026-10-15", 2);
        let pricing = PricingConfig::default();

        let first = estimate(&reservation, &pricing);
        let second = estimate(&reservation, &pricing);

        assert_eq!(first, second);
        assert_eq!(
            first.total,
            first.accommodation + first.meals + first.transport + first.training
                + first.accreditation
        );
    }

    #[test]
    fn estimate_reads_live_pricing() {
        let mut reservation = delegation_of_13();
        reservation.add_training_session("2026-10-14", 2);
        let mut pricing = PricingConfig::default();

        assert_eq!(
            estimate(&reservation, &pricing).training,
            Money::from_units(100)
        );

        pricing.training_slot = Money::from_units(80);
        assert_eq!(
            estimate(&reservation, &pricing).training,
            Money::from_units(160)
        );
    }
}
