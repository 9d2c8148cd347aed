//! Value objects for the reservation domain.

use common::{BlockId, SessionId};
use serde::{Deserialize, Serialize};

use crate::calendar;

/// Maximum number of players in a delegation.
pub const MAX_PLAYERS: u8 = 14;

/// Maximum number of staff members in a delegation.
pub const MAX_STAFF: u8 = 5;

/// Maximum delegation size, players and staff combined.
pub const MAX_DELEGATION: u8 = 19;

/// Money amount represented in cents to avoid floating point issues.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = €10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from whole euros.
    pub fn from_units(units: i64) -> Self {
        Self { cents: units * 100 }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the whole-euro portion.
    pub fn units(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after whole euros).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * quantity as i64,
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-€{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "€{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Delegation headcount with clamped player/staff counts.
///
/// `total` is always recomputed from the clamped parts and is never
/// independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeadCount {
    players: u8,
    staff: u8,
    total: u8,
}

impl HeadCount {
    /// Creates a headcount, clamping players to 14, staff to 5 and the
    /// total to 19.
    pub fn new(players: u8, staff: u8) -> Self {
        let players = players.min(MAX_PLAYERS);
        let staff = staff.min(MAX_STAFF);
        Self {
            players,
            staff,
            total: (players + staff).min(MAX_DELEGATION),
        }
    }

    /// Returns the number of players.
    pub fn players(&self) -> u8 {
        self.players
    }

    /// Returns the number of staff members.
    pub fn staff(&self) -> u8 {
        self.staff
    }

    /// Returns the delegation total.
    pub fn total(&self) -> u8 {
        self.total
    }
}

/// Requested stay range within the authorized event window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StayRange {
    pub arrival: String,
    pub departure: String,
}

/// Team basics collected on the first wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Basics {
    pub federation: String,
    pub country_code: String,
    pub team_name: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub head_count: HeadCount,
    pub stay: StayRange,
}

/// Partial update for team basics; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BasicsUpdate {
    pub federation: Option<String>,
    pub country_code: Option<String>,
    pub team_name: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

/// Rooms requested at one capacity within an accommodation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAllocation {
    /// Room capacity in persons (1–4).
    pub capacity: u8,

    /// Number of rooms requested at this capacity.
    pub count: u32,
}

/// A grouped accommodation request at one hotel for one stay range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccommodationBlock {
    pub id: BlockId,
    pub hotel: String,
    pub check_in: String,
    pub check_out: String,
    pub rooms: Vec<RoomAllocation>,
}

impl AccommodationBlock {
    /// Creates an empty block with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: BlockId::new(),
            hotel: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            rooms: Vec::new(),
        }
    }

    /// Total persons the requested rooms sleep.
    pub fn sleeps(&self) -> u32 {
        self.rooms
            .iter()
            .map(|room| room.capacity as u32 * room.count)
            .sum()
    }

    /// Nights between check-in and check-out, zero for malformed or
    /// reversed dates.
    pub fn nights(&self) -> u32 {
        calendar::days_between(&self.check_in, &self.check_out).unwrap_or(0)
    }
}

impl Default for AccommodationBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for an accommodation block.
#[derive(Debug, Clone, Default)]
pub struct BlockUpdate {
    pub hotel: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// Means of transport for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Plane,
    Bus,
    Car,
    #[default]
    None,
}

impl TransportType {
    /// Returns the wire name of the transport type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Plane => "plane",
            TransportType::Bus => "bus",
            TransportType::Car => "car",
            TransportType::None => "none",
        }
    }

    /// Parses a wire name; anything unknown means no transport booked.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "plane" => TransportType::Plane,
            "bus" => TransportType::Bus,
            "car" => TransportType::Car,
            _ => TransportType::None,
        }
    }
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One directional transport movement (arrival or departure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TransportLeg {
    pub kind: TransportType,
    pub date: String,
    pub time: String,
    pub location: String,
    pub flight_number: String,
    pub persons: u8,
    pub airport_transfer: bool,
}

/// Partial update for a transport leg; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LegUpdate {
    pub kind: Option<TransportType>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub flight_number: Option<String>,
    pub persons: Option<u8>,
    pub airport_transfer: Option<bool>,
}

/// Meal plan offered to delegations.
///
/// This edition sells half board only; the type leaves no room for
/// anything else, which is what enforces the fixed-plan rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealPlan {
    #[default]
    HalfBoard,
}

impl MealPlan {
    /// Returns the wire name of the plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            MealPlan::HalfBoard => "half_board",
        }
    }
}

impl std::fmt::Display for MealPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Special-diet headcounts within the delegation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DietaryCounts {
    pub vegetarian: u32,
    pub vegan: u32,
    pub gluten_free: u32,
    pub other: String,
}

/// Catering add-ons; at most one may be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MealAddons {
    lunch_package: bool,
    hot_lunch: bool,
}

impl MealAddons {
    /// Returns true if the packed-lunch add-on is selected.
    pub fn lunch_package(&self) -> bool {
        self.lunch_package
    }

    /// Returns true if the hot-lunch add-on is selected.
    pub fn hot_lunch(&self) -> bool {
        self.hot_lunch
    }

    /// Selects or clears the packed lunch; selecting it clears the hot
    /// lunch.
    pub fn set_lunch_package(&mut self, on: bool) {
        self.lunch_package = on;
        if on {
            self.hot_lunch = false;
        }
    }

    /// Selects or clears the hot lunch; selecting it clears the packed
    /// lunch.
    pub fn set_hot_lunch(&mut self, on: bool) {
        self.hot_lunch = on;
        if on {
            self.lunch_package = false;
        }
    }
}

/// Catering state for the delegation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MealsState {
    pub plan: MealPlan,
    pub dietary: DietaryCounts,
    pub addons: MealAddons,
}

/// Partial update for catering; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MealsUpdate {
    pub vegetarian: Option<u32>,
    pub vegan: Option<u32>,
    pub gluten_free: Option<u32>,
    pub other: Option<String>,
    pub lunch_package: Option<bool>,
    pub hot_lunch: Option<bool>,
}

/// A requested training session.
///
/// Sessions may be dated anywhere; only those on the paid training days
/// are charged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: SessionId,
    pub date: String,
    pub slots: u32,
}

impl TrainingSession {
    /// Creates a session; a session always books at least one slot.
    pub fn new(date: impl Into<String>, slots: u32) -> Self {
        Self {
            id: SessionId::new(),
            date: date.into(),
            slots: slots.max(1),
        }
    }
}

/// Partial update for a training session.
#[derive(Debug, Clone, Default)]
pub struct TrainingUpdate {
    pub date: Option<String>,
    pub slots: Option<u32>,
}

/// Legal-entity billing details.
///
/// `country` mirrors the team's country code and has no independent
/// update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BillingDetails {
    pub company_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub vat_id: String,
    pub billing_email: String,
}

/// Partial update for billing details; deliberately has no country field.
#[derive(Debug, Clone, Default)]
pub struct BillingUpdate {
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub vat_id: Option<String>,
    pub billing_email: Option<String>,
}
