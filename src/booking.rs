//! Building booking requests out of randomly drawn seats.

use rand::Rng;
use serde::Serialize;

use crate::api::SeatPool;
use crate::sample::{sample_unique, ExhaustionPolicy, SampleError};

/// Seat label submitted when no real seat could be attached to a passenger.
/// The service rejects it, so a booking built from an unavailable pool
/// exercises the validation failure path of the system under test.
pub const PLACEHOLDER_SEAT: &str = "XX";

/// One passenger on a booking request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Passenger {
    pub name: String,
    pub seat: String,
}

/// Payload of `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub flight_id: String,
    pub passengers: Vec<Passenger>,
}

/// Build a booking request for `flight_id` carrying exactly `count`
/// passengers.
///
/// Seats are drawn from the pool without replacement. Passengers no seat
/// could be drawn for (sold-out flight, or the pool ran out of distinct
/// labels) are booked onto [`PLACEHOLDER_SEAT`] instead, so the request
/// always carries the full passenger count even when it is known to fail
/// downstream validation. Under [`ExhaustionPolicy::Fail`] an exhausted
/// draw propagates as an error instead of being padded.
pub fn build_booking_request<R: Rng>(
    flight_id: &str,
    pool: &SeatPool,
    count: usize,
    max_attempts_per_seat: usize,
    policy: ExhaustionPolicy,
    rng: &mut R,
) -> Result<BookingRequest, SampleError> {
    let labels = pool.seat_labels();
    let drawn = sample_unique(&labels, count, max_attempts_per_seat, policy, rng)?;
    let passengers = (0..count)
        .map(|number| Passenger {
            name: format!("Passenger {}", number),
            seat: drawn
                .get(number)
                .map_or(PLACEHOLDER_SEAT, |label| *label)
                .to_string(),
        })
        .collect();
    Ok(BookingRequest {
        flight_id: flight_id.to_string(),
        passengers,
    })
}
