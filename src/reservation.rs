use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::guest::GuestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReservationId(pub usize);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reservation-{}", self.0)
    }
}

// A stay for one guest in one room. Guest and room are referenced, not owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    guest: GuestId,
    room: u32,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Reservation {
    pub fn new(
        guest: GuestId,
        room: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidStayDates {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            guest,
            room,
            check_in,
            check_out,
        })
    }

    pub fn guest(&self) -> GuestId {
        self.guest
    }

    pub fn room(&self) -> u32 {
        self.room
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    // Whole days between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn summary(&self, guest_name: &str) -> String {
        format!(
            "Reservation: {} in Room {} from {} to {}",
            guest_name, self.room, self.check_in, self.check_out
        )
    }
}
