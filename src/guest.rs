// Hotel guests and their loyalty balance

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::reservation::ReservationId;
use crate::validation::{valid_email, valid_name, valid_phone};

pub const LOYALTY_POINTS_PER_RESERVATION: u32 = 10;

// Handle to a guest registered with the hotel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestId(pub usize);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guest-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    name: String,
    email: String,
    phone: String,
    reservations: Vec<ReservationId>,
    loyalty_points: u32,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, BookingError> {
        Ok(Self {
            name: checked("name", name.into(), valid_name)?,
            email: checked("email", email.into(), valid_email)?,
            phone: checked("phone", phone.into(), valid_phone)?,
            reservations: Vec::new(),
            loyalty_points: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    pub fn reservation_history(&self) -> &[ReservationId] {
        &self.reservations
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), BookingError> {
        self.name = checked("name", name.into(), valid_name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), BookingError> {
        self.email = checked("email", email.into(), valid_email)?;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), BookingError> {
        self.phone = checked("phone", phone.into(), valid_phone)?;
        Ok(())
    }

    // Every reservation earns the same flat loyalty credit
    pub fn add_reservation(&mut self, reservation: ReservationId) {
        self.reservations.push(reservation);
        self.loyalty_points += LOYALTY_POINTS_PER_RESERVATION;
    }
}

fn checked(
    field: &'static str,
    value: String,
    is_valid: fn(&str) -> bool,
) -> Result<String, BookingError> {
    if is_valid(&value) {
        Ok(value)
    } else {
        Err(BookingError::InvalidGuestDetail { field, value })
    }
}
