use crate::payment::PaymentReceipt;
use chrono::{DateTime, NaiveDate, Utc};
use lankarail_catalog::FareClass;
use lankarail_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking lifecycle. A booking is created already confirmed — the mock
/// payment settles before the record exists — and cancellation is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A traveller on a booking. Owned exclusively by its booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub seat_number: Option<String>,
}

/// Who to reach about the booking. Phone and email are masked in logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: Masked<String>,
    pub email: Masked<String>,
}

/// A confirmed ticket purchase against one scheduled train.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Short human-readable reference shown on the ticket.
    pub reference: String,
    pub train_id: String,
    pub journey_date: NaiveDate,
    pub fare_class: FareClass,
    pub passengers: Vec<Passenger>,
    pub total_fare: f64,
    pub contact: ContactInfo,
    pub payment: PaymentReceipt,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }
}

/// Ticket-style reference derived from the booking id.
pub(crate) fn booking_reference(id: &Uuid) -> String {
    let hex = id.simple().to_string();
    format!("BK{}", hex[..8].to_ascii_uppercase())
}
