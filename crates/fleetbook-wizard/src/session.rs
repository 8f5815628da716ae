//! # Wizard Session
//!
//! The booking wizard's state machine and host-facing boundary.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Wizard Session Operations                            │
//! │                                                                         │
//! │  Host Action              Boundary Op              State Change         │
//! │  ───────────              ───────────              ────────────         │
//! │                                                                         │
//! │  Open booking UI ────────► open() ───────────────► fresh draft, step 1  │
//! │                                                                         │
//! │  Edit an input ──────────► update_field() ───────► draft field set,     │
//! │                                                    its error cleared,   │
//! │                                                    quote recomputed     │
//! │                                                                         │
//! │  Click Continue ─────────► advance_step() ───────► step +1 iff valid    │
//! │                                                                         │
//! │  Click Back ─────────────► retreat_step() ───────► step -1, no checks   │
//! │                                                                         │
//! │  Complete Booking ───────► submit_payment() ─────► record frozen,       │
//! │                                                    sink notified,       │
//! │                                                    step = Confirmation  │
//! │                                                                         │
//! │  Close ──────────────────► drop the session ─────► draft discarded      │
//! │                                                                         │
//! │  Every operation runs synchronously and returns the full WizardState   │
//! │  snapshot for the host to render. One session = one exclusive draft,   │
//! │  so no locking exists anywhere in the engine.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use fleetbook_core::pricing::{self, Quote};
use fleetbook_core::validation::{self, ValidationErrors};
use fleetbook_core::{BookingDraft, FieldUpdate, Step, Vehicle, VehicleCatalog};

use crate::record::BookingRecord;
use crate::submission::{BookingSink, LogSink, OutboundBooking};

// =============================================================================
// Wizard State (host view)
// =============================================================================

/// Snapshot of the session returned by every boundary operation.
///
/// The host renders exclusively from this view; it never reaches into the
/// session's internals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    /// The active step.
    pub current_step: Step,

    /// 1-based index of the active step, for the progress bar.
    pub step_index: u8,

    /// Display title of the active step.
    pub step_title: String,

    /// Whether the terminal Confirmation step has been reached.
    pub is_terminal: bool,

    /// Read view of the draft, for echoing input values back.
    pub draft: BookingDraft,

    /// Field-keyed validation messages for inline display.
    pub errors: ValidationErrors,

    /// Derived pricing, present once duration and vehicle allow it.
    pub quote: Option<Quote>,

    /// The confirmed booking, present only once terminal.
    pub booking: Option<BookingRecord>,
}

// =============================================================================
// Wizard Session
// =============================================================================

/// One user's trip through the booking wizard.
///
/// ## Ownership
/// The session exclusively owns its draft and its copy of the catalog.
/// All operations take `&mut self` and complete before returning - the
/// engine is single-threaded and event-driven by construction. Dropping
/// the session is cancellation: nothing was persisted along the way.
pub struct WizardSession {
    catalog: VehicleCatalog,
    draft: BookingDraft,
    step: Step,
    errors: ValidationErrors,
    quote: Option<Quote>,
    record: Option<BookingRecord>,
    sink: Box<dyn BookingSink>,
}

impl WizardSession {
    /// Opens the wizard with a fresh draft.
    ///
    /// A vehicle chosen in the fleet view may be pre-seeded; ids the
    /// catalog does not know are ignored with a warning rather than
    /// poisoning the draft.
    pub fn open(catalog: VehicleCatalog, preselected_vehicle_id: Option<&str>) -> Self {
        Self::open_with_sink(catalog, preselected_vehicle_id, Box::new(LogSink))
    }

    /// Opens the wizard with a custom submission sink.
    pub fn open_with_sink(
        catalog: VehicleCatalog,
        preselected_vehicle_id: Option<&str>,
        sink: Box<dyn BookingSink>,
    ) -> Self {
        let vehicle_id = match preselected_vehicle_id {
            Some(id) if catalog.find(id).is_some() => Some(id.to_string()),
            Some(id) => {
                warn!(vehicle_id = %id, "preselected vehicle not in catalog, ignoring");
                None
            }
            None => None,
        };
        debug!(preselected = vehicle_id.is_some(), "wizard opened");

        WizardSession {
            catalog,
            draft: BookingDraft::new(vehicle_id),
            step: Step::SelectVehicle,
            errors: ValidationErrors::new(),
            quote: None,
            record: None,
            sink,
        }
    }

    /// Returns the current state snapshot without changing anything.
    pub fn state(&self) -> WizardState {
        WizardState {
            current_step: self.step,
            step_index: self.step.index(),
            step_title: self.step.title().to_string(),
            is_terminal: self.step.is_terminal(),
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            quote: self.quote.clone(),
            booking: self.record.clone(),
        }
    }

    /// The catalog this session was opened with.
    pub fn catalog(&self) -> &VehicleCatalog {
        &self.catalog
    }

    /// The currently selected vehicle, if the draft names one.
    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.draft
            .vehicle_id
            .as_deref()
            .and_then(|id| self.catalog.find(id))
    }

    /// Applies one field update from the host.
    ///
    /// Post-conditions, in order:
    /// 1. the draft field holds the (shaped) new value,
    /// 2. any displayed error for that exact field is cleared,
    /// 3. the quote is recomputed when the field feeds into pricing.
    pub fn update_field(&mut self, update: FieldUpdate) -> WizardState {
        let field = update.field();
        debug!(?field, "update_field");

        let edited = self.draft.apply(update);
        self.errors.clear_field(edited);
        if edited.affects_pricing() {
            self.recompute_quote();
        }
        self.state()
    }

    /// Attempts to move to the next step.
    ///
    /// Runs the current step's validation rules; on failure the step stays
    /// put and the error map is surfaced for inline display. Leaving the
    /// Payment step successfully confirms the booking (see
    /// [`submit_payment`](Self::submit_payment)).
    pub fn advance_step(&mut self) -> WizardState {
        if self.step.is_terminal() {
            debug!("advance_step on terminal step ignored");
            return self.state();
        }

        let errors = validation::validate(self.step, &self.draft);
        if !errors.is_empty() {
            debug!(step = ?self.step, failing_fields = errors.len(), "advance blocked");
            self.errors = errors;
            return self.state();
        }

        self.errors = ValidationErrors::new();
        if self.step == Step::Payment {
            self.confirm();
        } else {
            self.step = self.step.next();
            debug!(step = ?self.step, "advanced");
        }
        self.state()
    }

    /// Moves to the previous step, floored at the first.
    ///
    /// Never validates: backward navigation is always permitted, even with
    /// invalid data in later, now-abandoned steps.
    pub fn retreat_step(&mut self) -> WizardState {
        self.step = self.step.prev();
        debug!(step = ?self.step, "retreated");
        self.state()
    }

    /// Completes the booking from the Payment step.
    ///
    /// Semantically this is `advance_step` invoked while on Payment, but on
    /// success it does more than unlock another editable step: the draft is
    /// frozen into a [`BookingRecord`], the submission sink is notified,
    /// and the session enters the terminal Confirmation step. Invoked on
    /// any other step it is a logged no-op.
    pub fn submit_payment(&mut self) -> WizardState {
        if self.step != Step::Payment {
            warn!(step = ?self.step, "submit_payment outside the payment step ignored");
            return self.state();
        }
        self.advance_step()
    }

    /// Freezes the draft and enters the terminal step.
    ///
    /// The record is created at most once per session: returning here after
    /// retreating out of the confirmation keeps the original record and
    /// does not notify the sink again.
    fn confirm(&mut self) {
        if self.record.is_none() {
            // Vehicle and quote are guaranteed resolvable here by the
            // validations that gated steps 1 and 2; the fallbacks below
            // surface the gap as ordinary validation errors instead of
            // panicking if a host ever bypasses the sequence.
            let Some(vehicle) = self.selected_vehicle().cloned() else {
                self.errors = validation::validate(Step::SelectVehicle, &self.draft);
                return;
            };
            let Some(quote) = pricing::quote(&self.draft, &vehicle) else {
                self.errors = validation::validate(Step::DateLocation, &self.draft);
                return;
            };
            let Some(record) = BookingRecord::freeze(&self.draft, &vehicle, quote) else {
                self.errors = validation::validate(Step::DateLocation, &self.draft);
                return;
            };

            match OutboundBooking::from_record(&record) {
                Ok(envelope) => self.sink.deliver(&envelope),
                Err(err) => warn!(%err, "failed to package booking for submission"),
            }
            info!(
                reference = %record.reference,
                total = %record.quote.total(),
                "booking confirmed"
            );
            self.record = Some(record);
        }

        self.step = Step::Confirmation;
    }

    /// Closes the wizard, discarding the draft.
    ///
    /// Present for API symmetry with [`open`](Self::open); dropping the
    /// session has the same effect. Cancellation has no side effects -
    /// nothing was persisted unless a record was already emitted.
    pub fn close(self) {
        debug!(step = ?self.step, confirmed = self.record.is_some(), "wizard closed");
    }

    /// Recomputes the derived pricing from the current draft.
    ///
    /// Called after every pricing-relevant mutation; there is no cache to
    /// invalidate, so the quote can never be stale.
    fn recompute_quote(&mut self) {
        self.quote = self
            .selected_vehicle()
            .and_then(|vehicle| pricing::quote(&self.draft, vehicle));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
