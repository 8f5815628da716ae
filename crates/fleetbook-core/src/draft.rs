//! # Booking Draft
//!
//! The single mutable state record the wizard edits across steps, plus the
//! input shaping applied when payment fields are typed.
//!
//! ## Ownership
//! A draft is owned exclusively by one wizard session. It is created when
//! the wizard opens, mutated by [`FieldUpdate`] events through steps 1-5,
//! and discarded when the session closes or a booking record is produced.
//!
//! ## Input Shaping
//! Malformed numeric input (letters in a card number, punctuation in a CVV)
//! is sanitized at the point of entry rather than rejected: the shaping
//! functions below strip and regroup, and validation later only checks
//! lengths.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::InsuranceTier;
use crate::validation::Field;
use crate::{MAX_CARD_DIGITS, MAX_CVV_DIGITS};

// =============================================================================
// Booking Draft
// =============================================================================

/// The in-progress reservation state edited across the wizard.
///
/// All fields start empty/unset; the UI host mutates them one
/// [`FieldUpdate`] at a time. Payment fields hold raw text - tokenizing or
/// securing them is out of scope for this engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    // Step 1: vehicle selection
    pub vehicle_id: Option<String>,

    // Step 2: date & location
    pub pickup_location: String,
    pub dropoff_location: String,
    #[ts(as = "Option<String>")]
    pub pickup_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub pickup_time: Option<NaiveTime>,
    #[ts(as = "Option<String>")]
    pub dropoff_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub dropoff_time: Option<NaiveTime>,

    // Step 3: personal details
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub drivers_license: String,

    // Step 4: extras
    pub insurance: InsuranceTier,
    pub gps: bool,
    pub child_seat: bool,
    pub additional_driver: bool,

    // Step 5: payment
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl BookingDraft {
    /// Creates a fresh draft, optionally pre-seeded with a chosen vehicle.
    pub fn new(preselected_vehicle_id: Option<String>) -> Self {
        BookingDraft {
            vehicle_id: preselected_vehicle_id,
            ..Default::default()
        }
    }

    /// Applies one field update, shaping payment input on the way in.
    ///
    /// Returns the [`Field`] that was edited so the caller can clear any
    /// displayed error for it and decide whether pricing must recompute.
    pub fn apply(&mut self, update: FieldUpdate) -> Field {
        match update {
            FieldUpdate::VehicleId(id) => {
                self.vehicle_id = Some(id);
                Field::VehicleId
            }
            FieldUpdate::PickupLocation(value) => {
                self.pickup_location = value;
                Field::PickupLocation
            }
            FieldUpdate::DropoffLocation(value) => {
                self.dropoff_location = value;
                Field::DropoffLocation
            }
            FieldUpdate::PickupDate(date) => {
                self.pickup_date = Some(date);
                Field::PickupDate
            }
            FieldUpdate::PickupTime(time) => {
                self.pickup_time = Some(time);
                Field::PickupTime
            }
            FieldUpdate::DropoffDate(date) => {
                self.dropoff_date = Some(date);
                Field::DropoffDate
            }
            FieldUpdate::DropoffTime(time) => {
                self.dropoff_time = Some(time);
                Field::DropoffTime
            }
            FieldUpdate::FirstName(value) => {
                self.first_name = value;
                Field::FirstName
            }
            FieldUpdate::LastName(value) => {
                self.last_name = value;
                Field::LastName
            }
            FieldUpdate::Email(value) => {
                self.email = value;
                Field::Email
            }
            FieldUpdate::Phone(value) => {
                self.phone = value;
                Field::Phone
            }
            FieldUpdate::DriversLicense(value) => {
                self.drivers_license = value;
                Field::DriversLicense
            }
            FieldUpdate::Insurance(tier) => {
                self.insurance = tier;
                Field::Insurance
            }
            FieldUpdate::Gps(on) => {
                self.gps = on;
                Field::Gps
            }
            FieldUpdate::ChildSeat(on) => {
                self.child_seat = on;
                Field::ChildSeat
            }
            FieldUpdate::AdditionalDriver(on) => {
                self.additional_driver = on;
                Field::AdditionalDriver
            }
            FieldUpdate::CardNumber(raw) => {
                self.card_number = shape_card_number(&raw);
                Field::CardNumber
            }
            FieldUpdate::CardName(value) => {
                self.card_name = value;
                Field::CardName
            }
            FieldUpdate::ExpiryDate(raw) => {
                self.expiry_date = shape_expiry(&raw);
                Field::ExpiryDate
            }
            FieldUpdate::Cvv(raw) => {
                self.cvv = shape_cvv(&raw);
                Field::Cvv
            }
        }
    }
}

// =============================================================================
// Field Update
// =============================================================================

/// A single-field mutation event from the UI host.
///
/// Serialized as `{ "field": "...", "value": ... }` so the frontend can send
/// updates generically from its input handlers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    VehicleId(String),
    PickupLocation(String),
    DropoffLocation(String),
    PickupDate(#[ts(as = "String")] NaiveDate),
    PickupTime(#[ts(as = "String")] NaiveTime),
    DropoffDate(#[ts(as = "String")] NaiveDate),
    DropoffTime(#[ts(as = "String")] NaiveTime),
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    DriversLicense(String),
    Insurance(InsuranceTier),
    Gps(bool),
    ChildSeat(bool),
    AdditionalDriver(bool),
    CardNumber(String),
    CardName(String),
    ExpiryDate(String),
    Cvv(String),
}

impl FieldUpdate {
    /// Returns the field this update targets.
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::VehicleId(_) => Field::VehicleId,
            FieldUpdate::PickupLocation(_) => Field::PickupLocation,
            FieldUpdate::DropoffLocation(_) => Field::DropoffLocation,
            FieldUpdate::PickupDate(_) => Field::PickupDate,
            FieldUpdate::PickupTime(_) => Field::PickupTime,
            FieldUpdate::DropoffDate(_) => Field::DropoffDate,
            FieldUpdate::DropoffTime(_) => Field::DropoffTime,
            FieldUpdate::FirstName(_) => Field::FirstName,
            FieldUpdate::LastName(_) => Field::LastName,
            FieldUpdate::Email(_) => Field::Email,
            FieldUpdate::Phone(_) => Field::Phone,
            FieldUpdate::DriversLicense(_) => Field::DriversLicense,
            FieldUpdate::Insurance(_) => Field::Insurance,
            FieldUpdate::Gps(_) => Field::Gps,
            FieldUpdate::ChildSeat(_) => Field::ChildSeat,
            FieldUpdate::AdditionalDriver(_) => Field::AdditionalDriver,
            FieldUpdate::CardNumber(_) => Field::CardNumber,
            FieldUpdate::CardName(_) => Field::CardName,
            FieldUpdate::ExpiryDate(_) => Field::ExpiryDate,
            FieldUpdate::Cvv(_) => Field::Cvv,
        }
    }
}

// =============================================================================
// Input Shaping
// =============================================================================

/// Regroups a typed card number into space-separated blocks of four digits.
///
/// Strips non-digits, caps at 16 digits, then regroups:
/// `"4242abc424242424242"` becomes `"4242 4242 4242 4242"`.
///
/// Inputs carrying fewer than four digits are returned as typed - there is
/// nothing to regroup yet and the cursor should not jump.
pub fn shape_card_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_CARD_DIGITS)
        .collect();

    if digits.len() < 4 {
        return raw.to_string();
    }

    let mut shaped = String::with_capacity(MAX_CARD_DIGITS + 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            shaped.push(' ');
        }
        shaped.push(digit);
    }
    shaped
}

/// Shapes a typed expiry into `MM/YY`.
///
/// Strips non-digits, caps at four digits, and inserts the slash once two
/// digits are present: `"1227"` becomes `"12/27"`.
pub fn shape_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();

    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Strips a typed CVV down to at most four digits.
pub fn shape_cvv(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_CVV_DIGITS)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
