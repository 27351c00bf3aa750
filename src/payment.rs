// Simulated payment processing
// Nothing is charged; processing only produces a receipt with a made-up reference.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub method: String,
    pub amount: Decimal,
    pub currency: String,
    pub reference: String,
}

impl PaymentReceipt {
    pub fn confirmation(&self) -> String {
        format!(
            "✅ Payment of {}{} processed via {}.",
            self.currency, self.amount, self.method
        )
    }
}

impl Payment {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn process(&self, amount: Decimal, currency: &str) -> PaymentReceipt {
        let reference = format!("PAY{}", rand::random::<u32>());
        tracing::info!(
            method = %self.method,
            %amount,
            currency,
            reference = %reference,
            "payment processed"
        );

        PaymentReceipt {
            method: self.method.clone(),
            amount,
            currency: currency.to_string(),
            reference,
        }
    }
}
