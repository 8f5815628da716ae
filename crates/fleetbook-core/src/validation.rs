//! # Validation Module
//!
//! Per-step validation rules for the booking wizard.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                    │
//! │                                                                         │
//! │  advance_step() / submit_payment()                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate(current_step, draft)  ← THIS MODULE                          │
//! │       │                                                                 │
//! │       ├── empty map  → navigation proceeds                             │
//! │       │                                                                 │
//! │       └── non-empty  → step unchanged, map returned for inline display │
//! │                                                                         │
//! │  Rules are evaluated exhaustively per step: every violated field is    │
//! │  reported simultaneously, never fail-fast.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are data, not control flow: the caller receives a
//! field-keyed message map and the wizard stays on the offending step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::draft::BookingDraft;
use crate::error::ValidationError;
use crate::types::Step;
use crate::{MIN_CARD_DIGITS, MIN_CVV_DIGITS};

// =============================================================================
// Field
// =============================================================================

/// Typed name of an editable draft field.
///
/// Used as the key of the error map and as the target of per-field error
/// clearing. The derived ordering follows wizard field order, which keeps
/// error maps deterministic for display and tests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    VehicleId,
    PickupLocation,
    DropoffLocation,
    PickupDate,
    PickupTime,
    DropoffDate,
    DropoffTime,
    FirstName,
    LastName,
    Email,
    Phone,
    DriversLicense,
    Insurance,
    Gps,
    ChildSeat,
    AdditionalDriver,
    CardNumber,
    CardName,
    ExpiryDate,
    Cvv,
}

impl Field {
    /// Human-readable label used in "{label} is required" messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::VehicleId => "Vehicle",
            Field::PickupLocation => "Pickup location",
            Field::DropoffLocation => "Dropoff location",
            Field::PickupDate => "Pickup date",
            Field::PickupTime => "Pickup time",
            Field::DropoffDate => "Dropoff date",
            Field::DropoffTime => "Dropoff time",
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::DriversLicense => "Driver's license",
            Field::Insurance => "Insurance",
            Field::Gps => "GPS",
            Field::ChildSeat => "Child seat",
            Field::AdditionalDriver => "Additional driver",
            Field::CardNumber => "Card number",
            Field::CardName => "Cardholder name",
            Field::ExpiryDate => "Expiry date",
            Field::Cvv => "CVV",
        }
    }

    /// Checks whether editing this field must trigger a pricing recompute.
    ///
    /// Exactly the inputs the quote is derived from: vehicle, rental dates,
    /// insurance tier, and the three add-on toggles.
    pub const fn affects_pricing(&self) -> bool {
        matches!(
            self,
            Field::VehicleId
                | Field::PickupDate
                | Field::DropoffDate
                | Field::Insurance
                | Field::Gps
                | Field::ChildSeat
                | Field::AdditionalDriver
        )
    }
}

// =============================================================================
// Validation Error Set
// =============================================================================

/// Field-keyed map of rendered validation messages.
///
/// An empty map means the step is valid and forward navigation is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a validation failure for a field, rendering its message.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error.to_string());
    }

    /// Removes any error recorded for a field.
    ///
    /// This is the optimistic-clearing primitive: editing field X removes
    /// key X from the displayed map, independent of full re-validation.
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns the message recorded for a field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Checks whether a field currently has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Checks if the set is empty (the step is valid).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates fields and messages in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// =============================================================================
// Step Rules
// =============================================================================

/// Validates the draft against one step's rules.
///
/// Pure function: same (step, draft) always produces the same error set.
/// The Extras step has no required fields and the terminal Confirmation
/// step has nothing left to check - both always return an empty set.
pub fn validate(step: Step, draft: &BookingDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        Step::SelectVehicle => {
            if draft.vehicle_id.is_none() {
                errors.insert(Field::VehicleId, ValidationError::VehicleRequired);
            }
        }

        Step::DateLocation => {
            require_text(&mut errors, Field::PickupLocation, &draft.pickup_location);
            require_text(&mut errors, Field::DropoffLocation, &draft.dropoff_location);
            require_set(&mut errors, Field::PickupDate, draft.pickup_date.is_some());
            require_set(&mut errors, Field::PickupTime, draft.pickup_time.is_some());
            require_set(&mut errors, Field::DropoffDate, draft.dropoff_date.is_some());
            require_set(&mut errors, Field::DropoffTime, draft.dropoff_time.is_some());

            // Date ordering is checked only when both dates are set; the
            // error attaches to the dropoff date. Never silently corrected.
            if let (Some(pickup), Some(dropoff)) = (draft.pickup_date, draft.dropoff_date) {
                if dropoff <= pickup {
                    errors.insert(Field::DropoffDate, ValidationError::DropoffBeforePickup);
                }
            }
        }

        Step::PersonalDetails => {
            require_text(&mut errors, Field::FirstName, &draft.first_name);
            require_text(&mut errors, Field::LastName, &draft.last_name);
            if draft.email.trim().is_empty() {
                errors.insert(
                    Field::Email,
                    ValidationError::Required {
                        label: Field::Email.label(),
                    },
                );
            } else if !is_email_shaped(&draft.email) {
                errors.insert(Field::Email, ValidationError::InvalidEmail);
            }
            require_text(&mut errors, Field::Phone, &draft.phone);
            require_text(&mut errors, Field::DriversLicense, &draft.drivers_license);
        }

        // All add-ons are optional; advancing from Extras always succeeds.
        Step::Extras => {}

        Step::Payment => {
            if draft.card_number.trim().is_empty() {
                errors.insert(
                    Field::CardNumber,
                    ValidationError::Required {
                        label: Field::CardNumber.label(),
                    },
                );
            } else if card_digit_count(&draft.card_number) < MIN_CARD_DIGITS {
                errors.insert(Field::CardNumber, ValidationError::CardNumberTooShort);
            }
            require_text(&mut errors, Field::CardName, &draft.card_name);
            require_text(&mut errors, Field::ExpiryDate, &draft.expiry_date);
            if draft.cvv.trim().is_empty() {
                errors.insert(
                    Field::Cvv,
                    ValidationError::Required {
                        label: Field::Cvv.label(),
                    },
                );
            } else if draft.cvv.chars().count() < MIN_CVV_DIGITS {
                errors.insert(Field::Cvv, ValidationError::CvvTooShort);
            }
        }

        Step::Confirmation => {}
    }

    errors
}

/// Records a Required error when a text field is empty or whitespace.
fn require_text(errors: &mut ValidationErrors, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.insert(
            field,
            ValidationError::Required {
                label: field.label(),
            },
        );
    }
}

/// Records a Required error when an optional field is unset.
fn require_set(errors: &mut ValidationErrors, field: Field, is_set: bool) {
    if !is_set {
        errors.insert(
            field,
            ValidationError::Required {
                label: field.label(),
            },
        );
    }
}

/// Counts the card characters that participate in the length rule.
///
/// The rule is "at least 16 digits after removing spaces"; input shaping
/// already guarantees digits, so this is a whitespace-insensitive count.
fn card_digit_count(card_number: &str) -> usize {
    card_number.chars().filter(|c| !c.is_whitespace()).count()
}

/// Loose `local@domain.tld` shape check.
///
/// Deliberately superficial, mirroring the wizard's inline check: some text,
/// an `@`, and a dotted domain. Full RFC 5322 parsing is not the goal.
fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid test time")
    }

    /// Draft with every step's fields filled in validly.
    fn complete_draft() -> BookingDraft {
        BookingDraft {
            vehicle_id: Some("veh-1".to_string()),
            pickup_location: "london".to_string(),
            dropoff_location: "paris".to_string(),
            pickup_date: Some(date(2025, 6, 1)),
            pickup_time: Some(time(10, 0)),
            dropoff_date: Some(date(2025, 6, 4)),
            dropoff_time: Some(time(10, 0)),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            drivers_license: "DL123456789".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            card_name: "ADA LOVELACE".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_vehicle_requires_a_vehicle() {
        let draft = BookingDraft::default();
        let errors = validate(Step::SelectVehicle, &draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::VehicleId), Some("Please select a car"));
    }

    #[test]
    fn test_every_step_passes_on_a_complete_draft() {
        let draft = complete_draft();
        assert!(validate(Step::SelectVehicle, &draft).is_empty());
        assert!(validate(Step::DateLocation, &draft).is_empty());
        assert!(validate(Step::PersonalDetails, &draft).is_empty());
        assert!(validate(Step::Extras, &draft).is_empty());
        assert!(validate(Step::Payment, &draft).is_empty());
    }

    #[test]
    fn test_date_location_reports_all_missing_fields_at_once() {
        let draft = BookingDraft::default();
        let errors = validate(Step::DateLocation, &draft);

        // Exhaustive, not fail-fast: all six fields reported together.
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(Field::PickupLocation));
        assert!(errors.contains(Field::DropoffLocation));
        assert!(errors.contains(Field::PickupDate));
        assert!(errors.contains(Field::PickupTime));
        assert!(errors.contains(Field::DropoffDate));
        assert!(errors.contains(Field::DropoffTime));
    }

    #[test]
    fn test_dropoff_must_be_after_pickup() {
        let mut draft = complete_draft();
        draft.dropoff_date = Some(date(2025, 5, 30));

        let errors = validate(Step::DateLocation, &draft);
        assert_eq!(
            errors.get(Field::DropoffDate),
            Some("Dropoff date must be after pickup date")
        );
    }

    #[test]
    fn test_same_day_dropoff_is_rejected() {
        let mut draft = complete_draft();
        draft.dropoff_date = draft.pickup_date;

        let errors = validate(Step::DateLocation, &draft);
        assert!(errors.contains(Field::DropoffDate));
    }

    #[test]
    fn test_missing_email_yields_exactly_the_email_key() {
        let mut draft = complete_draft();
        draft.email = String::new();

        let errors = validate(Step::PersonalDetails, &draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut draft = complete_draft();

        for bad in ["not-an-email", "a@b", "a@b.", "@b.c", "a b@c"] {
            draft.email = bad.to_string();
            let errors = validate(Step::PersonalDetails, &draft);
            assert_eq!(
                errors.get(Field::Email),
                Some("Email is invalid"),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_extras_step_is_always_valid() {
        // Even a completely empty draft may leave the Extras step.
        let draft = BookingDraft::default();
        assert!(validate(Step::Extras, &draft).is_empty());
    }

    #[test]
    fn test_full_card_number_passes() {
        let draft = complete_draft();
        assert!(validate(Step::Payment, &draft).is_empty());
    }

    #[test]
    fn test_short_card_number_fails_with_specific_message() {
        let mut draft = complete_draft();
        draft.card_number = "1234".to_string();

        let errors = validate(Step::Payment, &draft);
        assert_eq!(
            errors.get(Field::CardNumber),
            Some("Card number must be 16 digits")
        );
    }

    #[test]
    fn test_short_cvv_fails() {
        let mut draft = complete_draft();
        draft.cvv = "12".to_string();

        let errors = validate(Step::Payment, &draft);
        assert_eq!(errors.get(Field::Cvv), Some("CVV must be 3 digits"));
    }

    #[test]
    fn test_empty_payment_reports_all_fields() {
        let mut draft = complete_draft();
        draft.card_number = String::new();
        draft.card_name = String::new();
        draft.expiry_date = String::new();
        draft.cvv = String::new();

        let errors = validate(Step::Payment, &draft);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::CardName), Some("Cardholder name is required"));
    }

    #[test]
    fn test_clear_field_removes_only_that_key() {
        let draft = BookingDraft::default();
        let mut errors = validate(Step::DateLocation, &draft);
        assert_eq!(errors.len(), 6);

        errors.clear_field(Field::PickupDate);
        assert_eq!(errors.len(), 5);
        assert!(!errors.contains(Field::PickupDate));
        assert!(errors.contains(Field::DropoffDate));
    }

    #[test]
    fn test_errors_serialize_with_camel_case_keys() {
        // The host renders the map keyed by the frontend's field names.
        let draft = BookingDraft::default();
        let errors = validate(Step::SelectVehicle, &draft);

        let json = serde_json::to_value(&errors).expect("serializable");
        assert_eq!(
            json["vehicleId"],
            serde_json::Value::String("Please select a car".to_string())
        );
    }

    #[test]
    fn test_affects_pricing() {
        assert!(Field::VehicleId.affects_pricing());
        assert!(Field::PickupDate.affects_pricing());
        assert!(Field::Insurance.affects_pricing());
        assert!(Field::Gps.affects_pricing());
        assert!(!Field::PickupLocation.affects_pricing());
        assert!(!Field::CardNumber.affects_pricing());
        assert!(!Field::PickupTime.affects_pricing());
    }
}
