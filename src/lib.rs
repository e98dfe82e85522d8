//! # Flight booking load test
//!
//! Load test for the flight-booking-service HTTP API, built on the
//! [Goose](https://book.goose.rs/) load testing framework.
//!
//! Two scenarios drive the service the way its users do:
//!
//! - **searchFlights**: load the destination list, then search for flights
//!   departing from a randomly chosen airport.
//! - **searchAndBookFlight**: search for flights, pick one, fetch its open
//!   seats, and book two randomly drawn distinct seats. When the flight is
//!   sold out the booking is submitted anyway with placeholder seats,
//!   deliberately exercising the service's validation failure path.
//!
//! Goose owns scheduling, virtual users, the HTTP client, and aggregated
//! request metrics. This crate owns what each iteration does: random
//! selection (including drawing distinct seats without replacement),
//! request construction, and per-endpoint metric events in the established
//! `scenario.<name>.<METHOD>.<path>` naming scheme.
//!
//! Run against a locally running service:
//!
//! ```bash
//! cargo run --release -- --host http://localhost:3000 --users 51 --run-time 10m
//! ```

#[macro_use]
extern crate log;

pub mod api;
pub mod booking;
pub mod metrics;
pub mod sample;
pub mod scenarios;
