//! Reservation lifecycle state machine.

use serde::{Deserialize, Serialize};

/// The state of a reservation in its lifecycle.
///
/// State transitions:
/// ```text
/// Draft ──submit──► Submitted
/// ```
/// `Submitted` is terminal; the only way out is a full reset that starts
/// a new reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Reservation is being filled in, freely editable.
    #[default]
    Draft,

    /// Reservation was confirmed by the registry (terminal state).
    Submitted,
}

impl ReservationStatus {
    /// Returns true if wizard fields may still be edited in this state.
    pub fn can_edit(&self) -> bool {
        matches!(self, ReservationStatus::Draft)
    }

    /// Returns true if the reservation can be submitted in this state.
    pub fn can_submit(&self) -> bool {
        matches!(self, ReservationStatus::Draft)
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Submitted)
    }

    /// Returns the status name as stored by the registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Draft => "draft",
            ReservationStatus::Submitted => "submitted",
        }
    }

    /// Parses a stored status name; anything unknown is a draft.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "submitted" => ReservationStatus::Submitted,
            _ => ReservationStatus::Draft,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_draft() {
        assert_eq!(ReservationStatus::default(), ReservationStatus::Draft);
    }

    #[test]
    fn draft_can_edit_and_submit() {
        assert!(ReservationStatus::Draft.can_edit());
        assert!(ReservationStatus::Draft.can_submit());
        assert!(!ReservationStatus::Draft.is_terminal());
    }

    #[test]
    fn submitted_is_terminal() {
        assert!(!ReservationStatus::Submitted.can_edit());
        assert!(!ReservationStatus::Submitted.can_submit());
        assert!(ReservationStatus::Submitted.is_terminal());
    }

    #[test]
    fn parse_matches_stored_names() {
        assert_eq!(
            ReservationStatus::parse("submitted"),
            ReservationStatus::Submitted
        );
        assert_eq!(ReservationStatus::parse("draft"), ReservationStatus::Draft);
        assert_eq!(ReservationStatus::parse("???"), ReservationStatus::Draft);
    }

    #[test]
    fn serialization_uses_lowercase_names() {
        let json = serde_json::to_string(&ReservationStatus::Submitted).unwrap();
        assert_eq!(json, r#""submitted""#);
    }
}
