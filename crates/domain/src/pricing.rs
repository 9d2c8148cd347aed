//! Pricing configuration for cost estimation.
//!
//! Rates are process-wide mutable state: an administrative update path
//! deep-merges partial changes, and cost estimates always read the live
//! table. Nothing is snapshotted at submission time, so displayed costs
//! float with later rate changes.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::reservation::{MealPlan, Money};

/// Rate-table key used when a hotel or location has no dedicated entry.
pub const DEFAULT_RATE_KEY: &str = "default";

/// Per-person nightly rates by room capacity for one hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RoomRates {
    rates: BTreeMap<u8, Money>,
}

impl RoomRates {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-capacity rate, builder style.
    pub fn with_rate(mut self, capacity: u8, rate: Money) -> Self {
        self.rates.insert(capacity, rate);
        self
    }

    /// Sets the rate for one capacity.
    pub fn set(&mut self, capacity: u8, rate: Money) {
        self.rates.insert(capacity, rate);
    }

    /// Per-person rate for a capacity: the exact entry, else the
    /// single-room rate, else zero.
    pub fn per_person(&self, capacity: u8) -> Money {
        self.rates
            .get(&capacity)
            .or_else(|| self.rates.get(&1))
            .copied()
            .unwrap_or_default()
    }

    /// Merges another table into this one; capacities absent from
    /// `other` keep their current rate.
    pub fn merge(&mut self, other: RoomRates) {
        for (capacity, rate) in other.rates {
            self.rates.insert(capacity, rate);
        }
    }
}

/// Per-person daily catering rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CateringRates {
    pub half_board: Money,
    pub lunch_package: Money,
    pub hot_lunch: Money,
}

impl CateringRates {
    /// Daily base rate for a meal plan.
    pub fn plan_rate(&self, plan: MealPlan) -> Money {
        match plan {
            MealPlan::HalfBoard => self.half_board,
        }
    }
}

/// The full rate table injected into cost estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Room rates keyed by exact hotel name, plus the `default` table.
    pub accommodation: HashMap<String, RoomRates>,

    /// Catering plan and add-on rates.
    pub catering: CateringRates,

    /// Flat airport-transfer fees keyed by location, plus `default`.
    pub transport: HashMap<String, Money>,

    /// Rate per training slot on a paid training day.
    pub training_slot: Money,

    /// Accreditation fee per delegation member.
    pub accreditation: Money,
}

impl PricingConfig {
    /// Room-rate table for a hotel, falling back to the `default` table
    /// for hotels without a dedicated entry.
    pub fn room_rates(&self, hotel: &str) -> Option<&RoomRates> {
        self.accommodation
            .get(hotel)
            .or_else(|| self.accommodation.get(DEFAULT_RATE_KEY))
    }

    /// Flat transfer fee for a location, falling back to the `default`
    /// fee, then zero.
    pub fn transport_fee(&self, location: &str) -> Money {
        self.transport
            .get(location)
            .or_else(|| self.transport.get(DEFAULT_RATE_KEY))
            .copied()
            .unwrap_or_default()
    }

    /// Deep-merges a partial update; untouched keys are preserved.
    pub fn apply_update(&mut self, update: PricingUpdate) {
        for (hotel, rates) in update.accommodation {
            self.accommodation.entry(hotel).or_default().merge(rates);
        }
        if let Some(rate) = update.catering.half_board {
            self.catering.half_board = rate;
        }
        if let Some(rate) = update.catering.lunch_package {
            self.catering.lunch_package = rate;
        }
        if let Some(rate) = update.catering.hot_lunch {
            self.catering.hot_lunch = rate;
        }
        for (location, fee) in update.transport {
            self.transport.insert(location, fee);
        }
        if let Some(rate) = update.training_slot {
            self.training_slot = rate;
        }
        if let Some(rate) = update.accreditation {
            self.accreditation = rate;
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        let mut accommodation = HashMap::new();
        accommodation.insert(
            "Hotel Comfort Olomouc".to_string(),
            RoomRates::new()
                .with_rate(1, Money::from_units(80))
                .with_rate(2, Money::from_units(100))
                .with_rate(3, Money::from_units(90))
                .with_rate(4, Money::from_units(85)),
        );
        accommodation.insert(
            "Hotel Flora Olomouc".to_string(),
            RoomRates::new()
                .with_rate(1, Money::from_units(95))
                .with_rate(2, Money::from_units(110)),
        );
        accommodation.insert(
            DEFAULT_RATE_KEY.to_string(),
            RoomRates::new()
                .with_rate(1, Money::from_units(70))
                .with_rate(2, Money::from_units(85)),
        );

        let mut transport = HashMap::new();
        transport.insert("PRG".to_string(), Money::from_units(500));
        transport.insert("VIE".to_string(), Money::from_units(550));
        transport.insert("BRQ".to_string(), Money::from_units(300));
        transport.insert(DEFAULT_RATE_KEY.to_string(), Money::from_units(400));

        Self {
            accommodation,
            catering: CateringRates {
                half_board: Money::from_units(30),
                lunch_package: Money::from_units(10),
                hot_lunch: Money::from_units(12),
            },
            transport,
            training_slot: Money::from_units(50),
            accreditation: Money::from_units(25),
        }
    }
}

/// Partial catering-rate update.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CateringUpdate {
    pub half_board: Option<Money>,
    pub lunch_package: Option<Money>,
    pub hot_lunch: Option<Money>,
}

/// Partial pricing update applied by the administrative path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingUpdate {
    pub accommodation: HashMap<String, RoomRates>,
    pub catering: CateringUpdate,
    pub transport: HashMap<String, Money>,
    pub training_slot: Option<Money>,
    pub accreditation: Option<Money>,
}
