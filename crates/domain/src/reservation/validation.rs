//! Per-step validation gating forward wizard navigation.
//!
//! Only the basics and billing steps carry hard gates; every other step
//! can always be left. Soft advisories (capacity mismatch) are surfaced
//! separately and never block.

use serde::{Deserialize, Serialize};

use super::aggregate::Reservation;

/// Wizard steps in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Basics,
    Accommodation,
    Transport,
    Training,
    Meals,
    Billing,
    Confirmation,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Basics,
        WizardStep::Accommodation,
        WizardStep::Transport,
        WizardStep::Training,
        WizardStep::Meals,
        WizardStep::Billing,
        WizardStep::Confirmation,
    ];

    /// Returns the step name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Basics => "basics",
            WizardStep::Accommodation => "accommodation",
            WizardStep::Transport => "transport",
            WizardStep::Training => "training",
            WizardStep::Meals => "meals",
            WizardStep::Billing => "billing",
            WizardStep::Confirmation => "confirmation",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn require(errors: &mut Vec<String>, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(message.to_string());
    }
}

/// Lists what still blocks the given step; empty when it may be left.
pub fn step_errors(reservation: &Reservation, step: WizardStep) -> Vec<String> {
    let mut errors = Vec::new();
    match step {
        WizardStep::Basics => {
            let basics = reservation.basics();
            require(&mut errors, &basics.team_name, "Team name is required");
            require(
                &mut errors,
                &basics.contact_person,
                "Contact person is required",
            );
            if basics.head_count.players() == 0 {
                errors.push("At least one player is required".to_string());
            }
            if basics.head_count.staff() == 0 {
                errors.push("At least one staff member is required".to_string());
            }
        }
        WizardStep::Billing => {
            let billing = reservation.billing();
            require(&mut errors, &billing.company_name, "Company name is required");
            require(&mut errors, &billing.address, "Address is required");
            require(&mut errors, &billing.city, "City is required");
            require(&mut errors, &billing.postal_code, "Postal code is required");
            require(&mut errors, &billing.country, "Country is required");
            require(
                &mut errors,
                &billing.billing_email,
                "Billing email is required",
            );
        }
        // the remaining steps impose no hard gate
        _ => {}
    }
    errors
}

/// True when the step does not block forward navigation.
pub fn is_step_valid(reservation: &Reservation, step: WizardStep) -> bool {
    step_errors(reservation, step).is_empty()
}

/// Soft advisories for a step; shown, never blocking.
pub fn step_warnings(reservation: &Reservation, step: WizardStep) -> Vec<String> {
    let mut warnings = Vec::new();
    if matches!(step, WizardStep::Accommodation | WizardStep::Confirmation) {
        let total = reservation.basics().head_count.total() as u32;
        for block in reservation.accommodation() {
            let sleeps = block.sleeps();
            if !block.rooms.is_empty() && sleeps != total {
                let hotel = if block.hotel.trim().is_empty() {
                    "unnamed hotel"
                } else {
                    block.hotel.as_str()
                };
                warnings.push(format!(
                    "Rooms at {hotel} sleep {sleeps} but the delegation counts {total}"
                ));
            }
        }
    }
    warnings
}

/// True when every step passes its hard gate.
pub fn all_steps_valid(reservation: &Reservation) -> bool {
    WizardStep::ALL
        .iter()
        .all(|step| is_step_valid(reservation, *step))
}

/// True when the reservation may be submitted: every step valid and the
/// terms agreed to.
pub fn can_submit(reservation: &Reservation) -> bool {
    all_steps_valid(reservation) && reservation.agreed_to_terms()
}
