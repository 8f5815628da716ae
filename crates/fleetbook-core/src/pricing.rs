//! # Pricing Module
//!
//! Rental duration and quote computation.
//!
//! ## Derived, Never Stored
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quote Recomputation                                  │
//! │                                                                         │
//! │  Draft mutation (vehicle, dates, insurance, add-ons)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quote(draft, vehicle)  ← THIS MODULE (pure, no cache)                 │
//! │       │                                                                 │
//! │       ├── dates unset or duration ≤ 0 → None ("not yet computable")    │
//! │       │                                                                 │
//! │       └── Some(Quote)                                                   │
//! │            ├── Rental (3 days)          $450.00                         │
//! │            ├── Full Coverage            $135.00                         │
//! │            ├── GPS Navigation            $30.00                         │
//! │            └── total                    $615.00                         │
//! │                                                                         │
//! │  The calculator holds no state: staleness is eliminated by             │
//! │  construction, not by invalidation.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::draft::BookingDraft;
use crate::money::Money;
use crate::types::{InsuranceTier, Vehicle};
use crate::{ADDITIONAL_DRIVER_DAILY_CENTS, CHILD_SEAT_DAILY_CENTS, GPS_DAILY_CENTS};

// =============================================================================
// Quote Types
// =============================================================================

/// One charged component of a quote, as shown in the summary sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    /// Display label ("Rental (3 days)", "GPS Navigation", ...).
    pub label: String,

    /// Line amount in cents (per-day charge × rental days).
    pub amount_cents: i64,
}

impl QuoteLine {
    fn new(label: impl Into<String>, amount: Money) -> Self {
        QuoteLine {
            label: label.into(),
            amount_cents: amount.cents(),
        }
    }

    /// Returns the line amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// The derived pricing for the current draft.
///
/// Always a pure function of (draft, vehicle); never independently mutated.
/// The sum of line amounts equals the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Whole rental days between pickup and dropoff.
    pub rental_days: i64,

    /// Itemized charges in display order, base rental first.
    pub lines: Vec<QuoteLine>,

    /// Grand total in cents.
    pub total_cents: i64,
}

impl Quote {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Computes the rental duration in whole days.
///
/// Returns `None` while either date is unset or the dropoff does not fall
/// strictly after the pickup - pricing is "not yet computable", never an
/// error. Date-order violations are reported by validation, not here.
pub fn rental_days(draft: &BookingDraft) -> Option<i64> {
    let pickup = draft.pickup_date?;
    let dropoff = draft.dropoff_date?;

    let days = (dropoff - pickup).num_days();
    (days > 0).then_some(days)
}

/// Computes the quote for the current draft and its resolved vehicle.
///
/// ## Price Model
/// Every component is a per-day charge multiplied by the rental days:
/// the vehicle's daily rate, the insurance surcharge, and each selected
/// add-on. Basic insurance is included in the base price and produces no
/// line of its own.
pub fn quote(draft: &BookingDraft, vehicle: &Vehicle) -> Option<Quote> {
    let days = rental_days(draft)?;

    let mut lines = Vec::with_capacity(5);
    lines.push(QuoteLine::new(
        format!("Rental ({days} days)"),
        vehicle.daily_rate() * days,
    ));

    match draft.insurance {
        InsuranceTier::Basic => {}
        InsuranceTier::Premium => lines.push(QuoteLine::new(
            "Premium Insurance",
            draft.insurance.daily_surcharge() * days,
        )),
        InsuranceTier::Full => lines.push(QuoteLine::new(
            "Full Coverage",
            draft.insurance.daily_surcharge() * days,
        )),
    }

    if draft.gps {
        lines.push(QuoteLine::new(
            "GPS Navigation",
            Money::from_cents(GPS_DAILY_CENTS) * days,
        ));
    }
    if draft.child_seat {
        lines.push(QuoteLine::new(
            "Child Seat",
            Money::from_cents(CHILD_SEAT_DAILY_CENTS) * days,
        ));
    }
    if draft.additional_driver {
        lines.push(QuoteLine::new(
            "Additional Driver",
            Money::from_cents(ADDITIONAL_DRIVER_DAILY_CENTS) * days,
        ));
    }

    let total_cents: i64 = lines.iter().map(|line| line.amount_cents).sum();

    Some(Quote {
        rental_days: days,
        lines,
        total_cents,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Transmission;
    use crate::validation::Field;
    use chrono::NaiveDate;

    fn test_vehicle(daily_rate_cents: i64) -> Vehicle {
        Vehicle {
            id: "veh-1".to_string(),
            name: "Mercedes S-Class".to_string(),
            category: "Luxury Sedan".to_string(),
            daily_rate_cents,
            seats: 5,
            transmission: Transmission::Automatic,
            rating: 4.9,
            features: vec![],
            description: String::new(),
            image: "s-class.jpg".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn three_day_draft() -> BookingDraft {
        BookingDraft {
            vehicle_id: Some("veh-1".to_string()),
            pickup_date: Some(date(2025, 6, 1)),
            dropoff_date: Some(date(2025, 6, 4)),
            ..Default::default()
        }
    }

    #[test]
    fn test_rental_days_roundtrip() {
        // pickup 2025-06-01, dropoff 2025-06-04 → 3 days
        let draft = three_day_draft();
        assert_eq!(rental_days(&draft), Some(3));
    }

    #[test]
    fn test_rental_days_not_computable() {
        let mut draft = BookingDraft::default();
        assert_eq!(rental_days(&draft), None);

        draft.pickup_date = Some(date(2025, 6, 4));
        assert_eq!(rental_days(&draft), None);

        // Same-day and reversed ranges stay non-computable, never negative.
        draft.dropoff_date = Some(date(2025, 6, 4));
        assert_eq!(rental_days(&draft), None);

        draft.dropoff_date = Some(date(2025, 6, 1));
        assert_eq!(rental_days(&draft), None);
    }

    #[test]
    fn test_base_rental_only() {
        let draft = three_day_draft();
        let vehicle = test_vehicle(15000);

        let quote = quote(&draft, &vehicle).expect("computable");
        assert_eq!(quote.rental_days, 3);
        assert_eq!(quote.total_cents, 45000); // $150 × 3
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].label, "Rental (3 days)");
    }

    #[test]
    fn test_full_coverage_and_gps() {
        // $150/day × 3 + $45/day × 3 + $10/day × 3 = $615.00
        let mut draft = three_day_draft();
        draft.insurance = InsuranceTier::Full;
        draft.gps = true;
        let vehicle = test_vehicle(15000);

        let quote = quote(&draft, &vehicle).expect("computable");
        assert_eq!(quote.total_cents, 61500);
        assert_eq!(quote.total(), Money::from_dollars(615));

        let labels: Vec<&str> = quote.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Rental (3 days)", "Full Coverage", "GPS Navigation"]);
    }

    #[test]
    fn test_lines_sum_to_total() {
        let mut draft = three_day_draft();
        draft.insurance = InsuranceTier::Premium;
        draft.gps = true;
        draft.child_seat = true;
        draft.additional_driver = true;
        let vehicle = test_vehicle(18000);

        let quote = quote(&draft, &vehicle).expect("computable");
        let sum: i64 = quote.lines.iter().map(|l| l.amount_cents).sum();
        assert_eq!(sum, quote.total_cents);
        assert_eq!(quote.lines.len(), 5);
    }

    #[test]
    fn test_total_is_monotonic_in_insurance_tier() {
        let vehicle = test_vehicle(15000);
        let mut draft = three_day_draft();

        let mut last = -1;
        for tier in [InsuranceTier::Basic, InsuranceTier::Premium, InsuranceTier::Full] {
            draft.insurance = tier;
            let total = quote(&draft, &vehicle).expect("computable").total_cents;
            assert!(total > last, "tier {tier:?} should not lower the total");
            last = total;
        }
    }

    #[test]
    fn test_total_is_monotonic_in_extras() {
        let vehicle = test_vehicle(15000);
        let mut draft = three_day_draft();
        let mut last = quote(&draft, &vehicle).expect("computable").total_cents;

        for toggle in [Field::Gps, Field::ChildSeat, Field::AdditionalDriver] {
            match toggle {
                Field::Gps => draft.gps = true,
                Field::ChildSeat => draft.child_seat = true,
                _ => draft.additional_driver = true,
            }
            let total = quote(&draft, &vehicle).expect("computable").total_cents;
            assert!(total > last, "adding an extra should raise the total");
            last = total;
        }
    }
}
