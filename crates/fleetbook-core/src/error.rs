//! # Error Types
//!
//! Validation error types for fleetbook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fleetbook-core errors (this file)                                     │
//! │  └── ValidationError  - Why a single field fails a step's rules        │
//! │                                                                         │
//! │  fleetbook-core::validation                                            │
//! │  └── ValidationErrors - Field-keyed map shown inline by the UI host    │
//! │                                                                         │
//! │  Flow: ValidationError ──render──► ValidationErrors ──► UI host        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation failures are never raised as control-flow errors: the wizard
//! stays on the offending step and surfaces the rendered messages for inline
//! display. There are no fatal error conditions in the core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Each error variant maps to a user-facing message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field's validation failure.
///
/// The `Display` output of each variant is the exact message the UI host
/// shows next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{label} is required")]
    Required { label: &'static str },

    /// No vehicle has been chosen on the selection step.
    #[error("Please select a car")]
    VehicleRequired,

    /// Email does not match a general `local@domain.tld` shape.
    #[error("Email is invalid")]
    InvalidEmail,

    /// Dropoff date is on or before the pickup date.
    #[error("Dropoff date must be after pickup date")]
    DropoffBeforePickup,

    /// Card number carries fewer than 16 digits after removing spaces.
    #[error("Card number must be 16 digits")]
    CardNumberTooShort,

    /// CVV carries fewer than 3 digits.
    #[error("CVV must be 3 digits")]
    CvvTooShort,
}

// =============================================================================
// Unit Tests
// =============================================================================
