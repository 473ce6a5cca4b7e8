pub mod manager;
pub mod models;
pub mod payment;

pub use manager::{BookingError, BookingManager, BookingRequest, PassengerDraft};
pub use models::{Booking, BookingStatus, ContactInfo, Gender, Passenger};
pub use payment::{MockPaymentAdapter, PaymentAdapter, PaymentError, PaymentMethod, PaymentReceipt};
