// Front-desk walkthrough
// One linear pass: guest details, room choice, stay dates, reservation,
// invoice, payment, service request, feedback, loyalty summary.
// Invalid answers are re-asked; only closed input, an exhausted retry
// policy, or an I/O failure ends the run early.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::BookingConfig;
use crate::error::BookingError;
use crate::feedback::Rating;
use crate::guest::{Guest, GuestId};
use crate::hotel::Hotel;
use crate::payment::Payment;
use crate::prompt::{InputSource, PromptError, Prompter};
use crate::reservation::ReservationId;
use crate::room::Room;
use crate::service::ServiceStatus;
use crate::validation::{non_blank, valid_email, valid_name, valid_phone};

#[derive(Debug, Clone, Serialize)]
pub struct WalkthroughSummary {
    pub guest: GuestId,
    pub guest_name: String,
    pub reservation: ReservationId,
    pub room: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub invoice_total: Decimal,
    pub currency: String,
    pub payment_method: String,
    pub payment_reference: String,
    pub service_type: String,
    pub service_status: ServiceStatus,
    pub rating: Rating,
    pub comments: String,
    pub loyalty_points: u32,
}

pub fn run<I, W>(
    prompter: &mut Prompter<I, W>,
    hotel: &mut Hotel,
    config: &BookingConfig,
) -> Result<WalkthroughSummary, BookingError>
where
    I: InputSource,
    W: Write,
{
    prompter.say(&format!("\n🏨 Welcome to {} 🏨", config.hotel_name))?;

    let guest_id = collect_guest(prompter, hotel)?;

    show_available_rooms(prompter, hotel, &config.currency)?;
    let room = select_room(prompter, hotel)?;
    let (check_in, check_out) = collect_stay_dates(prompter)?;

    let reservation_id = hotel.book(guest_id, room, check_in, check_out)?;
    let guest_name = hotel.guest(guest_id)?.name().to_string();
    let reservation = hotel.reservation(reservation_id)?;
    let nights = reservation.nights();
    prompter.say("\n✅ Reservation Confirmed:")?;
    prompter.say(&reservation.summary(&guest_name))?;

    let invoice = hotel.invoice(reservation_id, &config.invoice)?;
    let invoice_total = invoice.total();
    prompter.say("\n🧾 Invoice:")?;
    prompter.say(&invoice.summary(&config.currency))?;

    let method = prompter.ask_validated(
        "Enter payment method (Credit Card / Wallet): ",
        non_blank,
        "Payment method cannot be empty.",
    )?;
    let receipt = Payment::new(method.trim()).process(invoice_total, &config.currency);
    prompter.say(&receipt.confirmation())?;

    let service_type = prompter.ask_validated(
        "Enter service needed (e.g., Housekeeping): ",
        non_blank,
        "Service cannot be empty.",
    )?;
    let request_id = hotel.request_service(guest_id, service_type.trim())?;
    prompter.say(&hotel.service_request(request_id)?.summary(&guest_name))?;
    hotel.complete_service(request_id)?;
    let request = hotel.service_request(request_id)?;
    prompter.say(&format!("After completion: {}", request.summary(&guest_name)))?;
    let service_status = request.status();
    let service_type = request.service_type().to_string();

    let rating = prompter.ask_with("Rate your stay (1-5): ", |answer| {
        answer
            .parse::<Rating>()
            .map_err(|_| "Rating must be between 1 and 5.".to_string())
    })?;
    let comments = prompter.ask("Leave a comment: ")?;
    let feedback = hotel.record_feedback(guest_id, rating, comments.clone())?;
    prompter.say("\n🗣️ Feedback received:")?;
    prompter.say(&feedback.summary(&guest_name))?;

    let loyalty_points = hotel.guest(guest_id)?.loyalty_points();
    prompter.say(&format!("\n⭐ Loyalty Points Earned: {}", loyalty_points))?;

    Ok(WalkthroughSummary {
        guest: guest_id,
        guest_name,
        reservation: reservation_id,
        room,
        check_in,
        check_out,
        nights,
        invoice_total,
        currency: config.currency.clone(),
        payment_method: receipt.method,
        payment_reference: receipt.reference,
        service_type,
        service_status,
        rating,
        comments,
        loyalty_points,
    })
}

fn collect_guest<I: InputSource, W: Write>(
    prompter: &mut Prompter<I, W>,
    hotel: &mut Hotel,
) -> Result<GuestId, BookingError> {
    let name = prompter.ask_validated(
        "Enter guest name: ",
        valid_name,
        "Name must contain only letters.",
    )?;
    let email =
        prompter.ask_validated("Enter guest email: ", valid_email, "Invalid email format.")?;
    let phone = prompter.ask_validated(
        "Enter contact number: ",
        valid_phone,
        "Phone must be at least 10 digits.",
    )?;

    Ok(hotel.register_guest(Guest::new(name, email, phone)?))
}

fn show_available_rooms<I: InputSource, W: Write>(
    prompter: &mut Prompter<I, W>,
    hotel: &Hotel,
    currency: &str,
) -> Result<(), BookingError> {
    prompter.say("\n🛏️ Available Rooms:")?;
    for room in hotel.available_rooms() {
        prompter.say(&room.summary(currency))?;
    }
    Ok(())
}

fn select_room<I: InputSource, W: Write>(
    prompter: &mut Prompter<I, W>,
    hotel: &Hotel,
) -> Result<u32, BookingError> {
    let room = prompter.ask_with("Enter room number to book: ", |answer| {
        let answer = answer.trim();
        if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
            return Err("Please enter a valid numeric room number.".to_string());
        }

        // Digit strings too large for u32 cannot name a room either
        answer
            .parse::<u32>()
            .ok()
            .filter(|number| hotel.room(*number).map_or(false, Room::is_available))
            .ok_or_else(|| "Selected room is not available or does not exist.".to_string())
    })?;
    Ok(room)
}

// Both dates are asked again until check-out falls after check-in
fn collect_stay_dates<I: InputSource, W: Write>(
    prompter: &mut Prompter<I, W>,
) -> Result<(NaiveDate, NaiveDate), BookingError> {
    let mut attempts = 0;
    loop {
        let check_in = prompter.ask_date("Enter check-in date (YYYY-MM-DD): ")?;
        let check_out = prompter.ask_date("Enter check-out date (YYYY-MM-DD): ")?;
        attempts += 1;

        if check_out > check_in {
            return Ok((check_in, check_out));
        }

        tracing::debug!(%check_in, %check_out, attempts, "rejected stay dates");
        prompter.reject("Check-out must be after check-in.")?;
        if prompter.policy().is_exhausted(attempts) {
            return Err(PromptError::AttemptsExhausted {
                prompt: "stay dates".to_string(),
                attempts,
            }
            .into());
        }
    }
}
