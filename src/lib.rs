// Royal Stay front-desk booking library

pub mod config;
pub mod error;
pub mod feedback;
pub mod guest;
pub mod hotel;
pub mod invoice;
pub mod payment;
pub mod prompt;
pub mod reservation;
pub mod room;
pub mod service;
pub mod validation;
pub mod walkthrough;

// Re-export key types for convenience
pub use config::BookingConfig;
pub use error::BookingError;
pub use feedback::{Feedback, Rating};
pub use guest::{Guest, GuestId, LOYALTY_POINTS_PER_RESERVATION};
pub use hotel::Hotel;
pub use invoice::{Invoice, InvoiceConfig};
pub use payment::{Payment, PaymentReceipt};
pub use prompt::{InputSource, LineInput, PromptError, Prompter, RetryPolicy, ScriptedInput};
pub use reservation::{Reservation, ReservationId};
pub use room::{Room, RoomType};
pub use service::{ServiceRequest, ServiceRequestId, ServiceStatus};
pub use walkthrough::WalkthroughSummary;
