use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies supported for fare display. All stored amounts are LKR;
/// conversion happens only at display time, with fixed rates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Lkr,
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Lkr,
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Lkr => "LKR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Lkr => "Rs",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Inr => "₹",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Lkr => "Sri Lankan Rupee",
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Inr => "Indian Rupee",
        }
    }

    /// Fixed conversion rate from 1 LKR.
    pub fn rate_from_lkr(&self) -> f64 {
        match self {
            Currency::Lkr => 1.0,
            Currency::Usd => 0.0033,
            Currency::Eur => 0.0030,
            Currency::Gbp => 0.0026,
            Currency::Inr => 0.27,
        }
    }

    /// LKR and INR conventionally place the symbol after the amount.
    pub fn symbol_after_amount(&self) -> bool {
        matches!(self, Currency::Lkr | Currency::Inr)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LKR" => Ok(Currency::Lkr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "INR" => Ok(Currency::Inr),
            other => Err(CurrencyError::Unsupported(other.to_string())),
        }
    }
}

/// Convert an LKR amount into the target currency.
pub fn convert_from_lkr(amount_lkr: f64, currency: Currency) -> f64 {
    amount_lkr * currency.rate_from_lkr()
}

/// Format an LKR amount for display in the given currency.
///
/// Two fraction digits; "1250.00 Rs" for symbol-after currencies,
/// "$4.13" for symbol-before ones.
pub fn format_price(amount_lkr: f64, currency: Currency) -> String {
    let converted = convert_from_lkr(amount_lkr, currency);
    // Round half-up to cents before formatting
    let rounded = (converted * 100.0).round() / 100.0;
    if currency.symbol_after_amount() {
        format!("{:.2} {}", rounded, currency.symbol())
    } else {
        format!("{}{:.2}", currency.symbol(), rounded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CurrencyError {
    #[error("Unsupported currency: {0}")]
    Unsupported(String),
}
