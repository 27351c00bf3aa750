// Invoice generation for a confirmed reservation
// total = nights * nightly rate + flat charges - flat discount

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::guest::Guest;
use crate::reservation::{Reservation, ReservationId};
use crate::room::Room;

// Flat adjustments applied to every invoice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceConfig {
    pub charges: Decimal,
    pub discount: Decimal,
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            charges: Decimal::from(50),
            discount: Decimal::from(20),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    reservation: ReservationId,
    guest_name: String,
    nights: i64,
    nightly_rate: Decimal,
    charges: Decimal,
    discount: Decimal,
}

impl Invoice {
    pub fn new(
        id: ReservationId,
        reservation: &Reservation,
        room: &Room,
        guest: &Guest,
        config: &InvoiceConfig,
    ) -> Self {
        Self {
            reservation: id,
            guest_name: guest.name().to_string(),
            nights: reservation.nights(),
            nightly_rate: room.nightly_rate(),
            charges: config.charges,
            discount: config.discount,
        }
    }

    pub fn reservation(&self) -> ReservationId {
        self.reservation
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn nights(&self) -> i64 {
        self.nights
    }

    pub fn charges(&self) -> Decimal {
        self.charges
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    // No rounding and no clamping: a discount larger than the rest goes negative
    pub fn total(&self) -> Decimal {
        let total = Decimal::from(self.nights) * self.nightly_rate + self.charges - self.discount;
        if total.is_sign_negative() && !total.is_zero() {
            tracing::warn!(
                reservation = %self.reservation,
                %total,
                "invoice total is negative"
            );
        }
        total
    }

    pub fn summary(&self, currency: &str) -> String {
        format!("Invoice for {}: {}{}", self.guest_name, currency, self.total())
    }
}
