//! # Booking Record
//!
//! The immutable snapshot produced once payment validation succeeds.
//!
//! ## Snapshot Pattern
//! The record copies everything it needs out of the draft, the catalog and
//! the quote at the instant of confirmation. The draft may keep changing
//! afterwards (the user can navigate back); the record never does. This is
//! the same freezing discipline a receipt applies to product prices at the
//! moment of sale.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use fleetbook_core::pricing::Quote;
use fleetbook_core::{BookingDraft, InsuranceTier, Vehicle};

// =============================================================================
// Booking Record
// =============================================================================

/// A confirmed reservation, created exactly once per wizard session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Booking reference (UUID v4), generated at confirmation.
    pub reference: String,

    /// The reserved vehicle, copied from the catalog.
    pub vehicle: Vehicle,

    // Logistics, frozen from the draft
    pub pickup_location: String,
    pub dropoff_location: String,
    #[ts(as = "String")]
    pub pickup_date: NaiveDate,
    #[ts(as = "String")]
    pub pickup_time: NaiveTime,
    #[ts(as = "String")]
    pub dropoff_date: NaiveDate,
    #[ts(as = "String")]
    pub dropoff_time: NaiveTime,

    // Customer, frozen from the draft
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub drivers_license: String,

    // Extras, frozen from the draft
    pub insurance: InsuranceTier,
    pub gps: bool,
    pub child_seat: bool,
    pub additional_driver: bool,

    /// The derived pricing at the instant of confirmation.
    pub quote: Quote,

    /// When the booking was confirmed.
    #[ts(as = "String")]
    pub confirmed_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Freezes the draft into a record.
    ///
    /// Returns `None` if any logistics field is still unset - unreachable
    /// through normal navigation, since the DateLocation step cannot be
    /// left with missing dates, but the signature stays total.
    pub fn freeze(draft: &BookingDraft, vehicle: &Vehicle, quote: Quote) -> Option<Self> {
        Some(BookingRecord {
            reference: Uuid::new_v4().to_string(),
            vehicle: vehicle.clone(),
            pickup_location: draft.pickup_location.clone(),
            dropoff_location: draft.dropoff_location.clone(),
            pickup_date: draft.pickup_date?,
            pickup_time: draft.pickup_time?,
            dropoff_date: draft.dropoff_date?,
            dropoff_time: draft.dropoff_time?,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            drivers_license: draft.drivers_license.clone(),
            insurance: draft.insurance,
            gps: draft.gps,
            child_seat: draft.child_seat,
            additional_driver: draft.additional_driver,
            quote,
            confirmed_at: Utc::now(),
        })
    }

    /// Customer display name for the confirmation summary.
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use fleetbook_core::pricing;
    use fleetbook_core::Transmission;

    fn test_vehicle() -> Vehicle {
        Vehicle {
            id: "veh-1".to_string(),
            name: "BMW X7".to_string(),
            category: "Luxury SUV".to_string(),
            daily_rate_cents: 18000,
            seats: 7,
            transmission: Transmission::Automatic,
            rating: 4.8,
            features: vec![],
            description: String::new(),
            image: "x7.jpg".to_string(),
        }
    }

    fn filled_draft() -> BookingDraft {
        BookingDraft {
            vehicle_id: Some("veh-1".to_string()),
            pickup_location: "london".to_string(),
            dropoff_location: "paris".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            pickup_time: NaiveTime::from_hms_opt(10, 0, 0),
            dropoff_date: NaiveDate::from_ymd_opt(2025, 6, 4),
            dropoff_time: NaiveTime::from_hms_opt(18, 30, 0),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_freeze_copies_draft_and_quote() {
        let draft = filled_draft();
        let vehicle = test_vehicle();
        let quote = pricing::quote(&draft, &vehicle).expect("computable");

        let record = BookingRecord::freeze(&draft, &vehicle, quote).expect("frozen");
        assert_eq!(record.vehicle.name, "BMW X7");
        assert_eq!(record.pickup_location, "london");
        assert_eq!(record.quote.rental_days, 3);
        assert_eq!(record.quote.total_cents, 54000);
        assert_eq!(record.customer_name(), "Ada Lovelace");
        assert!(!record.reference.is_empty());
    }

    #[test]
    fn test_freeze_requires_all_logistics_fields() {
        let mut draft = filled_draft();
        draft.dropoff_time = None;
        let vehicle = test_vehicle();
        let quote = pricing::quote(&draft, &vehicle).expect("computable");

        assert!(BookingRecord::freeze(&draft, &vehicle, quote).is_none());
    }

    #[test]
    fn test_record_is_independent_of_later_draft_edits() {
        let mut draft = filled_draft();
        let vehicle = test_vehicle();
        let quote = pricing::quote(&draft, &vehicle).expect("computable");
        let record = BookingRecord::freeze(&draft, &vehicle, quote).expect("frozen");

        draft.first_name = "Grace".to_string();
        draft.gps = true;

        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.quote.total_cents, 54000);
    }
}
