use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    Wallet,
    NetBanking,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::Wallet => "Mobile Wallet",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }

    fn receipt_prefix(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "pmt",
            PaymentMethod::Wallet => "wl",
            PaymentMethod::NetBanking => "nb",
        }
    }
}

/// Proof of a settled payment, attached to the booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: String,
    pub method: PaymentMethod,
    pub amount: f64,
    pub currency: String,
    pub processed_at: DateTime<Utc>,
}

/// Payment provider seam. The app ships only the mock; a real gateway
/// integration would implement the same trait.
#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Charge the given LKR amount. Resolves fully before returning: there
    /// is no pending state, a payment either settles or fails.
    async fn process(
        &self,
        method: PaymentMethod,
        amount: f64,
    ) -> Result<PaymentReceipt, PaymentError>;
}

/// Simulated payment provider: waits out an artificial network delay, then
/// settles every well-formed charge.
pub struct MockPaymentAdapter {
    latency: Duration,
}

impl MockPaymentAdapter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Instant-settling variant for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for MockPaymentAdapter {
    fn default() -> Self {
        // Matches the delay the production client simulated
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl PaymentAdapter for MockPaymentAdapter {
    async fn process(
        &self,
        method: PaymentMethod,
        amount: f64,
    ) -> Result<PaymentReceipt, PaymentError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(PaymentError::InvalidAmount(amount));
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let token = Uuid::new_v4().simple().to_string();
        Ok(PaymentReceipt {
            id: format!("{}_{}", method.receipt_prefix(), &token[..12]),
            method,
            amount,
            currency: "LKR".to_string(),
            processed_at: Utc::now(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment amount {0} is not chargeable")]
    InvalidAmount(f64),

    #[error("Payment declined: {0}")]
    Declined(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_settles_valid_charge() {
        let adapter = MockPaymentAdapter::instant();
        let receipt = adapter.process(PaymentMethod::Card, 2500.0).await.unwrap();
        assert!(receipt.id.starts_with("pmt_"));
        assert_eq!(receipt.amount, 2500.0);
        assert_eq!(receipt.currency, "LKR");
    }

    #[tokio::test]
    async fn test_receipt_prefix_follows_method() {
        let adapter = MockPaymentAdapter::instant();
        let wallet = adapter.process(PaymentMethod::Wallet, 100.0).await.unwrap();
        assert!(wallet.id.starts_with("wl_"));
        let bank = adapter
            .process(PaymentMethod::NetBanking, 100.0)
            .await
            .unwrap();
        assert!(bank.id.starts_with("nb_"));
    }

    #[tokio::test]
    async fn test_rejects_non_positive_amount() {
        let adapter = MockPaymentAdapter::instant();
        assert!(matches!(
            adapter.process(PaymentMethod::Card, 0.0).await,
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            adapter.process(PaymentMethod::Card, -50.0).await,
            Err(PaymentError::InvalidAmount(_))
        ));
    }
}
