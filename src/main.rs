//! Goose Attack against the flight-booking service.
//!
//! Registers both user journeys, weighted the way the service is exercised
//! in practice: searches vastly outnumber bookings. All run-time options
//! (host, users, hatch rate, run time, logs) come from the Goose command
//! line; only the default host is set here, matching the service's default
//! bind address.

use goose::prelude::*;

use flight_booking_loadtest::scenarios::{
    search_and_book_flight, search_flights, SEARCH_AND_BOOK_FLIGHT, SEARCH_FLIGHTS,
};

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(
            scenario!(SEARCH_FLIGHTS)
                .set_weight(50)?
                .register_transaction(transaction!(search_flights).set_name("search flights")),
        )
        .register_scenario(
            scenario!(SEARCH_AND_BOOK_FLIGHT)
                .set_weight(1)?
                .register_transaction(
                    transaction!(search_and_book_flight).set_name("search and book flight"),
                ),
        )
        .set_default(GooseDefault::Host, "http://localhost:3000")?
        .execute()
        .await?;

    Ok(())
}
