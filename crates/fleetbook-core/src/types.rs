//! # Domain Types
//!
//! Core domain types used throughout Fleetbook.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │   │      Step       │   │  InsuranceTier  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  SelectVehicle  │   │  Basic   (free) │       │
//! │  │  name           │   │  DateLocation   │   │  Premium ($25/d)│       │
//! │  │  category       │   │  PersonalDetails│   │  Full    ($45/d)│       │
//! │  │  daily_rate     │   │  Extras         │   └─────────────────┘       │
//! │  │  seats, rating  │   │  Payment        │                             │
//! │  └─────────────────┘   │  Confirmation   │   ┌─────────────────┐       │
//! │                        └─────────────────┘   │  Transmission   │       │
//! │  ┌─────────────────┐                         │  ─────────────  │       │
//! │  │ VehicleCatalog  │                         │  Automatic      │       │
//! │  │  read-only list │                         │  Manual         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is an external collaborator: it is supplied once when the
//! wizard opens and never mutated by the engine.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{FULL_INSURANCE_DAILY_CENTS, PREMIUM_INSURANCE_DAILY_CENTS};

// =============================================================================
// Transmission
// =============================================================================

/// Gearbox type of a rentable vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Automatic,
    Manual,
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle available for rental.
///
/// Vehicle records are read-only: the engine looks them up by id but never
/// changes them. Rates are stored in cents per day.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name shown in the fleet and on the confirmation summary.
    pub name: String,

    /// Marketing category ("Luxury Sedan", "Premium SUV", ...).
    pub category: String,

    /// Rental rate in cents per day.
    pub daily_rate_cents: i64,

    /// Passenger capacity.
    pub seats: u8,

    /// Gearbox type.
    pub transmission: Transmission,

    /// Average customer rating, 0.0 - 5.0.
    pub rating: f32,

    /// Feature list in display order ("Leather seats", "Panoramic roof", ...).
    pub features: Vec<String>,

    /// Long-form description for the detail view.
    pub description: String,

    /// Image reference resolved by the UI host.
    pub image: String,
}

impl Vehicle {
    /// Returns the daily rate as a Money type.
    #[inline]
    pub fn daily_rate(&self) -> Money {
        Money::from_cents(self.daily_rate_cents)
    }
}

// =============================================================================
// Vehicle Catalog
// =============================================================================

/// The read-only list of rentable vehicles, supplied once at wizard open.
///
/// Lookup is a linear scan: the fleet is a small bounded list, so no index
/// structure is warranted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Creates a catalog from a list of vehicle records.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        VehicleCatalog { vehicles }
    }

    /// Looks up a vehicle by id.
    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Returns the vehicles in catalog order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Returns the number of vehicles in the catalog.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

// =============================================================================
// Insurance Tier
// =============================================================================

/// Insurance coverage chosen on the Extras step.
///
/// The derived ordering (`Basic < Premium < Full`) matches the surcharge
/// ordering, which pricing tests rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceTier {
    /// Included in the base price.
    Basic,
    /// Reduced deductible, theft protection.
    Premium,
    /// Zero deductible.
    Full,
}

impl InsuranceTier {
    /// Returns the per-day surcharge for this tier.
    pub fn daily_surcharge(&self) -> Money {
        match self {
            InsuranceTier::Basic => Money::zero(),
            InsuranceTier::Premium => Money::from_cents(PREMIUM_INSURANCE_DAILY_CENTS),
            InsuranceTier::Full => Money::from_cents(FULL_INSURANCE_DAILY_CENTS),
        }
    }
}

impl Default for InsuranceTier {
    fn default() -> Self {
        InsuranceTier::Basic
    }
}

// =============================================================================
// Step
// =============================================================================

/// One of the six ordered stages of the booking wizard.
///
/// ## State Machine
/// ```text
/// ┌──────────────┐    ┌──────────────┐    ┌─────────────────┐
/// │SelectVehicle │───►│ DateLocation │───►│ PersonalDetails │
/// └──────────────┘    └──────────────┘    └────────┬────────┘
///        ▲ (retreat floors here)                   │
///                                                  ▼
/// ┌──────────────┐    ┌──────────────┐    ┌─────────────────┐
/// │ Confirmation │◄───│   Payment    │◄───│     Extras      │
/// └──────────────┘    └──────────────┘    └─────────────────┘
///     (terminal)       submit_payment
/// ```
///
/// Navigation is strictly sequential: ±1 per operation, no arbitrary jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    SelectVehicle = 1,
    DateLocation = 2,
    PersonalDetails = 3,
    Extras = 4,
    Payment = 5,
    Confirmation = 6,
}

impl Step {
    /// Returns the 1-based step index shown in the progress bar.
    #[inline]
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// Resolves a step from a 1-based index, clamping out-of-range values.
    ///
    /// Index requests outside [1, 6] are clamped, never treated as errors.
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 | 1 => Step::SelectVehicle,
            2 => Step::DateLocation,
            3 => Step::PersonalDetails,
            4 => Step::Extras,
            5 => Step::Payment,
            _ => Step::Confirmation,
        }
    }

    /// Returns the following step, saturating at the terminal step.
    pub const fn next(&self) -> Self {
        Step::from_index(self.index() + 1)
    }

    /// Returns the preceding step, saturating at the first step.
    pub const fn prev(&self) -> Self {
        Step::from_index(self.index().saturating_sub(1))
    }

    /// Display title for the progress bar.
    pub const fn title(&self) -> &'static str {
        match self {
            Step::SelectVehicle => "Select Car",
            Step::DateLocation => "Date & Location",
            Step::PersonalDetails => "Your Details",
            Step::Extras => "Extras",
            Step::Payment => "Payment",
            Step::Confirmation => "Confirmation",
        }
    }

    /// Checks whether this is the terminal step.
    ///
    /// Once reached, the draft is frozen into a booking record and no
    /// forward navigation remains.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Step::Confirmation)
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::SelectVehicle
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
