// In-memory hotel registry
// Owns every record for one session. Records point at each other through
// handles (GuestId, ReservationId, ServiceRequestId, room number) so rooms and
// guests stay addressable on their own after a reservation is made.

use chrono::NaiveDate;

use crate::error::BookingError;
use crate::feedback::{Feedback, Rating};
use crate::guest::{Guest, GuestId};
use crate::invoice::{Invoice, InvoiceConfig};
use crate::reservation::{Reservation, ReservationId};
use crate::room::{default_catalog, Room};
use crate::service::{ServiceRequest, ServiceRequestId};

#[derive(Debug, Default)]
pub struct Hotel {
    rooms: Vec<Room>,
    guests: Vec<Guest>,
    reservations: Vec<Reservation>,
    service_requests: Vec<ServiceRequest>,
    feedback: Vec<Feedback>,
}

impl Hotel {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            ..Self::default()
        }
    }

    pub fn with_default_rooms() -> Self {
        Self::new(default_catalog())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_available())
    }

    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number() == number)
    }

    pub fn register_guest(&mut self, guest: Guest) -> GuestId {
        let id = GuestId(self.guests.len());
        tracing::debug!(guest = %id, name = guest.name(), "guest registered");
        self.guests.push(guest);
        id
    }

    pub fn guest(&self, id: GuestId) -> Result<&Guest, BookingError> {
        self.guests.get(id.0).ok_or(BookingError::UnknownGuest(id))
    }

    pub fn guest_mut(&mut self, id: GuestId) -> Result<&mut Guest, BookingError> {
        self.guests.get_mut(id.0).ok_or(BookingError::UnknownGuest(id))
    }

    // Book a room for a registered guest.
    // The room leaves the available pool for the rest of the session.
    pub fn book(
        &mut self,
        guest: GuestId,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<ReservationId, BookingError> {
        self.guest(guest)?;

        let room_index = self
            .rooms
            .iter()
            .position(|room| room.number() == room_number)
            .ok_or(BookingError::RoomNotFound(room_number))?;
        if !self.rooms[room_index].is_available() {
            return Err(BookingError::RoomUnavailable(room_number));
        }

        let reservation = Reservation::new(guest, room_number, check_in, check_out)?;
        let id = ReservationId(self.reservations.len());

        self.reservations.push(reservation);
        self.rooms[room_index].set_available(false);
        self.guest_mut(guest)?.add_reservation(id);

        tracing::info!(
            reservation = %id,
            guest = %guest,
            room = room_number,
            %check_in,
            %check_out,
            "reservation confirmed"
        );
        Ok(id)
    }

    pub fn reservation(&self, id: ReservationId) -> Result<&Reservation, BookingError> {
        self.reservations
            .get(id.0)
            .ok_or(BookingError::UnknownReservation(id))
    }

    pub fn invoice(
        &self,
        id: ReservationId,
        config: &InvoiceConfig,
    ) -> Result<Invoice, BookingError> {
        let reservation = self.reservation(id)?;
        let room = self
            .room(reservation.room())
            .ok_or(BookingError::RoomNotFound(reservation.room()))?;
        let guest = self.guest(reservation.guest())?;

        Ok(Invoice::new(id, reservation, room, guest, config))
    }

    pub fn request_service(
        &mut self,
        guest: GuestId,
        service_type: impl Into<String>,
    ) -> Result<ServiceRequestId, BookingError> {
        self.guest(guest)?;

        let id = ServiceRequestId(self.service_requests.len());
        let request = ServiceRequest::new(id, guest, service_type);
        tracing::debug!(request = %id, service = request.service_type(), "service requested");
        self.service_requests.push(request);
        Ok(id)
    }

    pub fn service_request(&self, id: ServiceRequestId) -> Result<&ServiceRequest, BookingError> {
        self.service_requests
            .get(id.0)
            .ok_or(BookingError::UnknownServiceRequest(id))
    }

    pub fn complete_service(&mut self, id: ServiceRequestId) -> Result<(), BookingError> {
        self.service_requests
            .get_mut(id.0)
            .ok_or(BookingError::UnknownServiceRequest(id))?
            .complete()?;
        tracing::debug!(request = %id, "service completed");
        Ok(())
    }

    pub fn record_feedback(
        &mut self,
        guest: GuestId,
        rating: Rating,
        comments: impl Into<String>,
    ) -> Result<&Feedback, BookingError> {
        self.guest(guest)?;

        self.feedback.push(Feedback::new(guest, rating, comments));
        let index = self.feedback.len() - 1;
        Ok(&self.feedback[index])
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ServiceStatus;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hotel_with_jane() -> (Hotel, GuestId) {
        let mut hotel = Hotel::with_default_rooms();
        let jane = Guest::new("Jane Doe", "jane@x.com", "1234567890").unwrap();
        let guest = hotel.register_guest(jane);
        (hotel, guest)
    }

    #[test]
    fn test_booking_takes_room_out_of_pool() {
        let (mut hotel, jane) = hotel_with_jane();
        assert_eq!(hotel.rooms().len(), 3);
        assert_eq!(hotel.available_rooms().count(), 3);

        let id = hotel.book(jane, 101, date(2024, 3, 1), date(2024, 3, 3)).unwrap();

        assert!(!hotel.room(101).unwrap().is_available());
        assert_eq!(
            hotel.room(101).unwrap().summary("AED"),
            "Room 101 - Single - AED300 - Available: False"
        );
        let available: Vec<u32> = hotel.available_rooms().map(Room::number).collect();
        assert_eq!(available, vec![102, 201]);

        let guest = hotel.guest(jane).unwrap();
        assert_eq!(guest.loyalty_points(), 10);
        assert_eq!(guest.reservation_history(), &[id]);
    }

    #[test]
    fn test_booked_room_cannot_be_booked_again() {
        let (mut hotel, jane) = hotel_with_jane();
        hotel.book(jane, 102, date(2024, 3, 1), date(2024, 3, 3)).unwrap();

        let again = hotel.book(jane, 102, date(2024, 4, 1), date(2024, 4, 3));

        assert!(matches!(again, Err(BookingError::RoomUnavailable(102))));
        assert_eq!(hotel.guest(jane).unwrap().loyalty_points(), 10);
    }

    #[test]
    fn test_failed_booking_changes_nothing() {
        let (mut hotel, jane) = hotel_with_jane();

        let missing = hotel.book(jane, 999, date(2024, 3, 1), date(2024, 3, 3));
        assert!(matches!(missing, Err(BookingError::RoomNotFound(999))));

        let reversed = hotel.book(jane, 201, date(2024, 3, 3), date(2024, 3, 1));
        assert!(matches!(reversed, Err(BookingError::InvalidStayDates { .. })));

        assert!(hotel.room(201).unwrap().is_available());
        assert_eq!(hotel.guest(jane).unwrap().loyalty_points(), 0);
    }

    #[test]
    fn test_loyalty_after_several_reservations() {
        let (mut hotel, jane) = hotel_with_jane();
        for room in [101, 102, 201] {
            hotel.book(jane, room, date(2024, 5, 1), date(2024, 5, 2)).unwrap();
        }

        let guest = hotel.guest(jane).unwrap();
        assert_eq!(guest.loyalty_points(), 30);
        assert_eq!(guest.reservation_history().len(), 3);
        assert_eq!(hotel.available_rooms().count(), 0);
    }

    #[test]
    fn test_invoice_uses_booked_room_rate() {
        let (mut hotel, jane) = hotel_with_jane();
        let id = hotel.book(jane, 101, date(2024, 1, 1), date(2024, 1, 4)).unwrap();

        let invoice = hotel.invoice(id, &InvoiceConfig::default()).unwrap();

        assert_eq!(invoice.total(), Decimal::from(980));
        assert_eq!(invoice.guest_name(), "Jane Doe");
        assert_eq!(invoice.reservation(), id);
        assert_eq!(invoice.charges() - invoice.discount(), Decimal::from(30));
    }

    #[test]
    fn test_unknown_handles_are_errors() {
        let hotel = Hotel::with_default_rooms();
        assert!(matches!(hotel.guest(GuestId(3)), Err(BookingError::UnknownGuest(_))));
        assert!(matches!(
            hotel.invoice(ReservationId(0), &InvoiceConfig::default()),
            Err(BookingError::UnknownReservation(_))
        ));
    }

    #[test]
    fn test_service_and_feedback_flow() {
        let (mut hotel, jane) = hotel_with_jane();

        let request = hotel.request_service(jane, "Housekeeping").unwrap();
        assert_eq!(hotel.service_request(request).unwrap().guest(), jane);
        assert_eq!(hotel.service_request(request).unwrap().id(), request);
        assert_eq!(hotel.service_request(request).unwrap().status(), ServiceStatus::Pending);

        hotel.complete_service(request).unwrap();
        assert_eq!(hotel.service_request(request).unwrap().status(), ServiceStatus::Completed);
        assert!(hotel.complete_service(request).is_err());
        assert_eq!(hotel.service_request(request).unwrap().status(), ServiceStatus::Completed);

        let rating = Rating::try_from(4).unwrap();
        let feedback = hotel.record_feedback(jane, rating, "Lovely").unwrap();
        assert_eq!(feedback.summary("Jane Doe"), "Feedback from Jane Doe: 4/5 - Lovely");
        assert_eq!(hotel.feedback().len(), 1);
        assert_eq!(hotel.feedback()[0].guest(), jane);
    }
}
