//! The user journeys driven against the flight-booking service.
//!
//! Each journey is a single Goose transaction walking the whole flow with
//! explicit intermediate state, pausing between steps like a person reading
//! the page. The engine decides how often and by how many users a journey
//! runs; non-200 answers from the service simply end the remaining work of
//! that iteration.

use std::env;
use std::time::Duration;

use goose::prelude::*;
use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;

use crate::api::{Destinations, Flight, SeatPool};
use crate::booking;
use crate::metrics::{self, LogSink};
use crate::sample::ExhaustionPolicy;

/// Scenario names, used for registration and in emitted metric names.
pub const SEARCH_FLIGHTS: &str = "searchFlights";
pub const SEARCH_AND_BOOK_FLIGHT: &str = "searchAndBookFlight";

/// Passengers on every booking request.
pub const PASSENGERS_PER_BOOKING: usize = 2;

/// Attempts to find one more unused seat before giving up on a passenger.
pub const SEAT_DRAW_ATTEMPTS: usize = 3;

/// Credentials the service accepts on its `/bookings` endpoints.
const AUTH_USER: &str = "user";
const AUTH_PASSWORD: &str = "pw";

/// Goose request name of the seat listing, with the flight identifier
/// already normalized out.
const SEATS_REQUEST_NAME: &str = "/flights/$flightID/seats";

lazy_static! {
    /// Sampler behavior when no unused seat turns up within the attempt
    /// budget, read once from `LOADTEST_ON_EXHAUSTION`.
    static ref ON_EXHAUSTION: ExhaustionPolicy = match env::var("LOADTEST_ON_EXHAUSTION") {
        Ok(value) => match parse_policy(&value) {
            Some(policy) => policy,
            None => {
                warn!(
                    "unknown LOADTEST_ON_EXHAUSTION value {:?}, defaulting to returnPartial",
                    value
                );
                ExhaustionPolicy::ReturnPartial
            }
        },
        Err(_) => ExhaustionPolicy::ReturnPartial,
    };
}

fn parse_policy(value: &str) -> Option<ExhaustionPolicy> {
    match value {
        "returnPartial" => Some(ExhaustionPolicy::ReturnPartial),
        "fail" => Some(ExhaustionPolicy::Fail),
        _ => None,
    }
}

/// Issue a named GET, emit its metric event, and deserialize the JSON body.
///
/// A non-200 answer yields `Ok(None)`: the iteration has no further work.
/// Unparsable bodies and transport errors are recorded as request failures.
async fn fetch_json<T: DeserializeOwned>(
    user: &mut GooseUser,
    scenario: &str,
    path: &str,
    name: &str,
) -> Result<Option<T>, Box<TransactionError>> {
    let mut goose = user.get_named(path, name).await?;
    match goose.response {
        Ok(response) => {
            let status = response.status().as_u16();
            metrics::record_response(
                &LogSink,
                scenario,
                "GET",
                path,
                status,
                goose.request.response_time,
            );
            if status != 200 {
                return Ok(None);
            }
            match response.json::<T>().await {
                Ok(body) => Ok(Some(body)),
                Err(e) => user
                    .set_failure(
                        &format!("{}: failed to parse response: {}", goose.request.raw.url, e),
                        &mut goose.request,
                        None,
                        None,
                    )
                    .map(|_| None),
            }
        }
        Err(e) => user
            .set_failure(
                &format!("{}: no response from server: {}", goose.request.raw.url, e),
                &mut goose.request,
                None,
                None,
            )
            .map(|_| None),
    }
}

/// A user looking up where they can fly: load the destination list, then
/// search for flights departing from a randomly chosen airport.
pub async fn search_flights(user: &mut GooseUser) -> TransactionResult {
    let destinations = match fetch_json::<Destinations>(
        user,
        SEARCH_FLIGHTS,
        "/destinations",
        "/destinations",
    )
    .await?
    {
        Some(destinations) => destinations,
        None => return Ok(()),
    };
    tokio::time::sleep(Duration::from_millis(500)).await;

    let from = match destinations.from.choose(&mut rand::thread_rng()) {
        Some(from) => from.clone(),
        None => return Ok(()),
    };
    let path = format!("/flights?from={}", from);
    let mut goose = user.get_named(&path, "/flights").await?;
    match goose.response {
        Ok(response) => {
            metrics::record_response(
                &LogSink,
                SEARCH_FLIGHTS,
                "GET",
                &path,
                response.status().as_u16(),
                goose.request.response_time,
            );
            Ok(())
        }
        Err(e) => user.set_failure(
            &format!("{}: no response from server: {}", goose.request.raw.url, e),
            &mut goose.request,
            None,
            None,
        ),
    }
}

/// A user booking a trip: search for flights from a random airport, pick
/// one, fetch its open seats, and book two of them. When the flight is sold
/// out the booking is submitted with placeholder seats and is expected to
/// be rejected.
pub async fn search_and_book_flight(user: &mut GooseUser) -> TransactionResult {
    let destinations = match fetch_json::<Destinations>(
        user,
        SEARCH_AND_BOOK_FLIGHT,
        "/destinations",
        "/destinations",
    )
    .await?
    {
        Some(destinations) => destinations,
        None => return Ok(()),
    };
    tokio::time::sleep(Duration::from_secs(1)).await;

    let from = match destinations.from.choose(&mut rand::thread_rng()) {
        Some(from) => from.clone(),
        None => return Ok(()),
    };
    let flights_path = format!("/flights?from={}", from);
    let flights = match fetch_json::<Vec<Flight>>(
        user,
        SEARCH_AND_BOOK_FLIGHT,
        &flights_path,
        "/flights",
    )
    .await?
    {
        Some(flights) => flights,
        None => return Ok(()),
    };
    let flight = match flights.choose(&mut rand::thread_rng()) {
        Some(flight) => flight,
        None => return Ok(()),
    };
    tokio::time::sleep(Duration::from_secs(1)).await;

    // Unlike the other GET steps, a sold-out flight answers 404 with a body
    // that is still meaningful, so the seat listing is read on any status.
    let seats_path = format!("/flights/{}/seats", flight.id);
    let mut goose = user.get_named(&seats_path, SEATS_REQUEST_NAME).await?;
    let pool = match goose.response {
        Ok(response) => {
            metrics::record_response(
                &LogSink,
                SEARCH_AND_BOOK_FLIGHT,
                "GET",
                &seats_path,
                response.status().as_u16(),
                goose.request.response_time,
            );
            match response.json::<SeatPool>().await {
                Ok(pool) => pool,
                Err(e) => {
                    return user.set_failure(
                        &format!("{}: failed to parse response: {}", goose.request.raw.url, e),
                        &mut goose.request,
                        None,
                        None,
                    );
                }
            }
        }
        Err(e) => {
            return user.set_failure(
                &format!("{}: no response from server: {}", goose.request.raw.url, e),
                &mut goose.request,
                None,
                None,
            );
        }
    };

    let booking = match booking::build_booking_request(
        &flight.id,
        &pool,
        PASSENGERS_PER_BOOKING,
        SEAT_DRAW_ATTEMPTS,
        *ON_EXHAUSTION,
        &mut rand::thread_rng(),
    ) {
        Ok(booking) => booking,
        Err(e) => {
            return user.set_failure(
                &format!("seat selection failed: {}", e),
                &mut goose.request,
                None,
                None,
            );
        }
    };

    let pause = rand::thread_rng().gen_range(0..3);
    tokio::time::sleep(Duration::from_secs(pause)).await;

    let request_builder = user
        .get_request_builder(&GooseMethod::Post, "/bookings")?
        .basic_auth(AUTH_USER, Some(AUTH_PASSWORD))
        .json(&booking);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path("/bookings")
        .name("/bookings")
        .set_request_builder(request_builder)
        .build();
    let mut goose = user.request(goose_request).await?;
    match goose.response {
        Ok(response) => {
            let status = response.status().as_u16();
            metrics::record_response(
                &LogSink,
                SEARCH_AND_BOOK_FLIGHT,
                "POST",
                "/bookings",
                status,
                goose.request.response_time,
            );
            if status != 200 {
                return user.set_failure(
                    "booking was not successful",
                    &mut goose.request,
                    None,
                    None,
                );
            }
            Ok(())
        }
        Err(e) => user.set_failure(
            &format!("{}: no response from server: {}", goose.request.raw.url, e),
            &mut goose.request,
            None,
            None,
        ),
    }
}
