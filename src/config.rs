// Session configuration
use crate::invoice::InvoiceConfig;
use crate::prompt::RetryPolicy;

#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub hotel_name: String,
    pub currency: String,
    pub invoice: InvoiceConfig,
    pub retry: RetryPolicy,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            hotel_name: "Royal Stay Hotel".to_string(),
            currency: "AED".to_string(),
            invoice: InvoiceConfig::default(),
            retry: RetryPolicy::unlimited(),
        }
    }
}
