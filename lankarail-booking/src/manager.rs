use crate::models::{booking_reference, Booking, BookingStatus, ContactInfo, Gender, Passenger};
use crate::payment::{PaymentAdapter, PaymentError, PaymentMethod};
use chrono::{NaiveDate, Utc};
use lankarail_catalog::{FareCalculator, FareClass, TrainSchedule};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub const MIN_PASSENGERS: usize = 1;
pub const MAX_PASSENGERS: usize = 5;

/// Passenger details as entered on the booking form, before ids exist.
#[derive(Debug, Clone)]
pub struct PassengerDraft {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub seat_number: Option<String>,
}

/// Everything needed to attempt a booking.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub journey_date: NaiveDate,
    pub fare_class: FareClass,
    pub passengers: Vec<PassengerDraft>,
    pub contact: ContactInfo,
    pub payment_method: PaymentMethod,
}

/// Owns booking records and their lifecycle.
///
/// Fare computation and payment happen inside `create_booking`, so a
/// `Booking` only ever exists with a settled payment behind it. The only
/// transition after that is `Confirmed -> Cancelled`, and it is one-way.
pub struct BookingManager {
    bookings: HashMap<Uuid, Booking>,
    calculator: FareCalculator,
    payment: Arc<dyn PaymentAdapter>,
    max_passengers: usize,
}

impl BookingManager {
    pub fn new(calculator: FareCalculator, payment: Arc<dyn PaymentAdapter>) -> Self {
        Self {
            bookings: HashMap::new(),
            calculator,
            payment,
            max_passengers: MAX_PASSENGERS,
        }
    }

    pub fn with_max_passengers(mut self, max_passengers: usize) -> Self {
        self.max_passengers = max_passengers;
        self
    }

    /// Validate the request, charge the payment, and record the booking.
    pub async fn create_booking(
        &mut self,
        train: &TrainSchedule,
        request: BookingRequest,
    ) -> Result<Booking, BookingError> {
        let count = request.passengers.len();
        if count < MIN_PASSENGERS || count > self.max_passengers {
            return Err(BookingError::PassengerCount {
                given: count,
                min: MIN_PASSENGERS,
                max: self.max_passengers,
            });
        }
        for draft in &request.passengers {
            if draft.name.trim().is_empty() || draft.age == 0 {
                return Err(BookingError::IncompletePassenger(draft.name.clone()));
            }
        }

        let total_fare =
            self.calculator
                .compute_total(&train.fare, request.fare_class, count as u32);

        let receipt = self
            .payment
            .process(request.payment_method, total_fare)
            .await?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let passengers = request
            .passengers
            .into_iter()
            .map(|draft| Passenger {
                id: Uuid::new_v4(),
                name: draft.name,
                age: draft.age,
                gender: draft.gender,
                seat_number: draft.seat_number,
            })
            .collect();

        let booking = Booking {
            id,
            reference: booking_reference(&id),
            train_id: train.id.clone(),
            journey_date: request.journey_date,
            fare_class: request.fare_class,
            passengers,
            total_fare,
            contact: request.contact,
            payment: receipt,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            booking = %booking.reference,
            train = %train.number,
            passengers = count,
            total = total_fare,
            "booking confirmed"
        );

        self.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    pub fn get_booking(&self, id: &Uuid) -> Option<&Booking> {
        self.bookings.get(id)
    }

    pub fn bookings(&self) -> Vec<&Booking> {
        self.bookings.values().collect()
    }

    /// Transition: Confirmed -> Cancelled. Cancelled is terminal.
    pub fn cancel_booking(&mut self, id: &Uuid) -> Result<(), BookingError> {
        let booking = self
            .bookings
            .get_mut(id)
            .ok_or_else(|| BookingError::NotFound(id.to_string()))?;

        if booking.status != BookingStatus::Confirmed {
            return Err(BookingError::InvalidTransition {
                from: format!("{:?}", booking.status),
                to: "CANCELLED".to_string(),
            });
        }

        booking.status = BookingStatus::Cancelled;
        booking.updated_at = Utc::now();
        Ok(())
    }

    /// Re-hydrate a persisted booking into the manager (app start).
    pub fn restore(&mut self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Passenger count {given} outside allowed range {min}..={max}")]
    PassengerCount {
        given: usize,
        min: usize,
        max: usize,
    },

    #[error("Passenger {0:?} is missing a name or age")]
    IncompletePassenger(String),

    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
