//! # Booking Submission
//!
//! The outbound seam between the wizard and whatever backend eventually
//! stores bookings.
//!
//! ## Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Submission Boundary                                  │
//! │                                                                         │
//! │  submit_payment() succeeds                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookingRecord ──► OutboundBooking { reference, payload (JSON) }       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookingSink::deliver()  ← the LAST thing the engine does              │
//! │                                                                         │
//! │  The engine performs no network I/O. The provided sinks only log or    │
//! │  collect in memory; a real dispatcher lives outside this workspace.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::record::BookingRecord;

// =============================================================================
// Outbound Envelope
// =============================================================================

/// A confirmed booking packaged for hand-off to a submission backend.
///
/// The full record travels as a JSON payload so the receiving side needs no
/// compile-time knowledge of the record type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundBooking {
    /// Booking reference, duplicated out of the payload for routing.
    pub reference: String,

    /// The full booking record as JSON.
    pub payload: String,

    /// When the envelope was created.
    pub created_at: DateTime<Utc>,
}

impl OutboundBooking {
    /// Packages a record into an envelope.
    pub fn from_record(record: &BookingRecord) -> serde_json::Result<Self> {
        Ok(OutboundBooking {
            reference: record.reference.clone(),
            payload: serde_json::to_string(record)?,
            created_at: Utc::now(),
        })
    }
}

// =============================================================================
// Sink Trait
// =============================================================================

/// Receives confirmed bookings.
///
/// Implementations must not block: delivery happens synchronously inside
/// `submit_payment`, before the confirmation state is returned to the host.
pub trait BookingSink {
    fn deliver(&mut self, booking: &OutboundBooking);
}

/// Default sink: logs the dispatch and drops the envelope.
///
/// Stands in for the real backend hand-off, which is outside this engine's
/// scope.
#[derive(Debug, Default)]
pub struct LogSink;

impl BookingSink for LogSink {
    fn deliver(&mut self, booking: &OutboundBooking) {
        info!(reference = %booking.reference, "booking submitted");
    }
}

/// Collecting sink for tests and demos.
///
/// Clone the handle before moving the sink into a session, then inspect
/// what was delivered through the handle afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Rc<RefCell<Vec<OutboundBooking>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle sharing this sink's delivered list.
    pub fn handle(&self) -> Rc<RefCell<Vec<OutboundBooking>>> {
        Rc::clone(&self.delivered)
    }
}

impl BookingSink for MemorySink {
    fn deliver(&mut self, booking: &OutboundBooking) {
        self.delivered.borrow_mut().push(booking.clone());
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
    use fleetbook_core::{BookingDraft, Transmission, Vehicle};

    fn confirmed_record() -> BookingRecord {
        let vehicle = Vehicle {
            id: "veh-1".to_string(),
            name: "Audi A8".to_string(),
            category: "Executive Sedan".to_string(),
            daily_rate_cents: 14000,
            seats: 5,
            transmission: Transmission::Automatic,
            rating: 4.9,
            features: vec![],
            description: String::new(),
            image: "a8.jpg".to_string(),
        };
        let draft = BookingDraft {
            vehicle_id: Some("veh-1".to_string()),
            pickup_location: "rome".to_string(),
            dropoff_location: "rome".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            pickup_time: NaiveTime::from_hms_opt(9, 0, 0),
            dropoff_date: NaiveDate::from_ymd_opt(2025, 6, 3),
            dropoff_time: NaiveTime::from_hms_opt(9, 0, 0),
            ..Default::default()
        };
        let quote = pricing::quote(&draft, &vehicle).expect("computable");
        BookingRecord::freeze(&draft, &vehicle, quote).expect("frozen")
    }

    #[test]
    fn test_envelope_carries_record_as_json() {
        let record = confirmed_record();
        let envelope = OutboundBooking::from_record(&record).expect("serializable");

        assert_eq!(envelope.reference, record.reference);

        let decoded: BookingRecord =
            serde_json::from_str(&envelope.payload).expect("payload parses back");
        assert_eq!(decoded.reference, record.reference);
        assert_eq!(decoded.quote.total_cents, record.quote.total_cents);
    }

    #[test]
    fn test_memory_sink_collects_deliveries() {
        let sink = MemorySink::new();
        let handle = sink.handle();
        let mut sink = sink;

        let record = confirmed_record();
        let envelope = OutboundBooking::from_record(&record).expect("serializable");
        sink.deliver(&envelope);

        let delivered = handle.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].reference, record.reference);
    }
}
