//! # fleetbook-core: Pure Business Logic for Fleetbook
//!
//! This crate is the **heart** of the Fleetbook booking wizard. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Fleetbook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (UI host)                         │   │
//! │  │   Fleet UI ──► Wizard Steps UI ──► Payment UI ──► Summary UI   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    fleetbook-wizard                             │   │
//! │  │    open, update_field, advance_step, submit_payment, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fleetbook-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Vehicle  │  │   Money   │  │   Quote   │  │   rules   │  │   │
//! │  │   │   Step    │  │           │  │ QuoteLine │  │  per step │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Step, InsuranceTier, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`draft`] - The mutable booking draft and input shaping
//! - [`validation`] - Per-step validation rules
//! - [`pricing`] - Rental duration and quote computation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use fleetbook_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let rate = Money::from_cents(15000); // $150.00 per day
//!
//! // A three-day rental of the base vehicle
//! let base = rate * 3;
//! assert_eq!(base.cents(), 45000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fleetbook_core::Money` instead of
// `use fleetbook_core::money::Money`

pub use draft::{BookingDraft, FieldUpdate};
pub use error::ValidationError;
pub use money::Money;
pub use types::*;
pub use validation::{Field, ValidationErrors};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Daily surcharge for the premium insurance tier, in cents.
///
/// ## Business Reason
/// Premium coverage reduces the deductible and adds theft protection.
/// Charged per rental day on top of the vehicle's daily rate.
pub const PREMIUM_INSURANCE_DAILY_CENTS: i64 = 25_00;

/// Daily surcharge for the full-coverage insurance tier, in cents.
///
/// ## Business Reason
/// Full coverage carries zero deductible, priced accordingly.
pub const FULL_INSURANCE_DAILY_CENTS: i64 = 45_00;

/// Daily charge for the GPS navigation add-on, in cents.
pub const GPS_DAILY_CENTS: i64 = 10_00;

/// Daily charge for the child seat add-on, in cents.
pub const CHILD_SEAT_DAILY_CENTS: i64 = 8_00;

/// Daily charge for the additional-driver add-on, in cents.
pub const ADDITIONAL_DRIVER_DAILY_CENTS: i64 = 15_00;

/// Minimum number of digits a card number must carry to pass validation.
///
/// ## Business Reason
/// The wizard performs a superficial length check only - no Luhn check,
/// no issuer lookup. Real authorization happens outside this engine.
pub const MIN_CARD_DIGITS: usize = 16;

/// Maximum number of card digits retained by input shaping.
pub const MAX_CARD_DIGITS: usize = 16;

/// Minimum number of digits a CVV must carry to pass validation.
pub const MIN_CVV_DIGITS: usize = 3;

/// Maximum number of CVV digits retained by input shaping.
pub const MAX_CVV_DIGITS: usize = 4;
