pub mod currency;
pub mod pii;

pub use currency::{format_price, Currency, CurrencyError};
pub use pii::Masked;
