//! # fleetbook-wizard: Booking Wizard Session Engine
//!
//! This crate drives a user's trip through the six-step booking wizard:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Booking Wizard Engine                              │
//! │                                                                         │
//! │   1 Select Car → 2 Date & Location → 3 Your Details                    │
//! │                                           │                             │
//! │   6 Confirmation ← 5 Payment ← 4 Extras ◄─┘                            │
//! │        🏁              │                                                │
//! │                  submit_payment freezes the draft into an              │
//! │                  immutable BookingRecord and notifies the              │
//! │                  submission sink                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All business rules (validation, pricing, input shaping) live in
//! [`fleetbook_core`]; this crate owns the one mutable [`session`] per
//! wizard and the [`submission`] seam to the outside world.
//!
//! ## Example
//!
//! ```rust
//! use fleetbook_core::VehicleCatalog;
//! use fleetbook_wizard::WizardSession;
//!
//! let catalog = VehicleCatalog::new(vec![]);
//! let mut session = WizardSession::open(catalog, None);
//!
//! // Nothing selected yet: the first step refuses to advance.
//! let state = session.advance_step();
//! assert_eq!(state.step_index, 1);
//! assert!(!state.errors.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod record;
pub mod session;
pub mod submission;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use record::BookingRecord;
pub use session::{WizardSession, WizardState};
pub use submission::{BookingSink, LogSink, MemorySink, OutboundBooking};
