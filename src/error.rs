use chrono::NaiveDate;
use thiserror::Error;

use crate::guest::GuestId;
use crate::prompt::PromptError;
use crate::reservation::ReservationId;
use crate::service::ServiceRequestId;

// Error types for the booking domain
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid {field}: {value:?}")]
    InvalidGuestDetail { field: &'static str, value: String },

    #[error("Check-out {check_out} must be after check-in {check_in}")]
    InvalidStayDates {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("Room {0} does not exist")]
    RoomNotFound(u32),

    #[error("Room {0} is not available")]
    RoomUnavailable(u32),

    #[error("Unknown guest: {0}")]
    UnknownGuest(GuestId),

    #[error("Unknown reservation: {0}")]
    UnknownReservation(ReservationId),

    #[error("Unknown service request: {0}")]
    UnknownServiceRequest(ServiceRequestId),

    #[error("Service request {0} is already completed")]
    ServiceAlreadyCompleted(ServiceRequestId),

    #[error("Rating must be between 1 and 5, got {0:?}")]
    InvalidRating(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
