//! Wire types for the flight-booking-service API under test.

use serde::Deserialize;

/// Answer of `GET /destinations`: the airports flights depart from and
/// arrive at.
#[derive(Clone, Debug, Deserialize)]
pub struct Destinations {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

/// One flight, as returned by `GET /flights`.
#[derive(Clone, Debug, Deserialize)]
pub struct Flight {
    pub id: String,
    pub from: String,
    pub to: String,
    pub status: String,
}

/// One open seat on a flight, as returned by `GET /flights/{id}/seats`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub flight_id: String,
    pub seat: String,
    pub row: u32,
    pub price: u32,
    pub available: bool,
}

/// Answer of `GET /flights/{id}/seats`. A flight with open seats yields the
/// seat list; a sold-out flight yields an error object instead. Both are
/// expected answers, not protocol failures, so both deserialize into this
/// one type.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SeatPool {
    Available(Vec<Seat>),
    Unavailable { error: String },
}

impl SeatPool {
    /// The seat labels a booking can try to claim, empty when the flight is
    /// sold out.
    pub fn seat_labels(&self) -> Vec<&str> {
        match self {
            SeatPool::Available(seats) => seats.iter().map(|seat| seat.seat.as_str()).collect(),
            SeatPool::Unavailable { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_list_parses_as_available_pool() {
        let body = r#"[
            {"flightId": "f-1", "seat": "1A", "row": 1, "price": 120, "available": true},
            {"flightId": "f-1", "seat": "1B", "row": 1, "price": 80, "available": true}
        ]"#;
        let pool: SeatPool = serde_json::from_str(body).unwrap();
        assert_eq!(pool.seat_labels(), vec!["1A", "1B"]);
    }

    #[test]
    fn sold_out_sentinel_parses_as_unavailable_pool() {
        let body = r#"{"error": "no seats available"}"#;
        let pool: SeatPool = serde_json::from_str(body).unwrap();
        match pool {
            SeatPool::Unavailable { ref error } => assert_eq!(error, "no seats available"),
            SeatPool::Available(_) => panic!("sentinel parsed as a seat list"),
        }
        assert!(pool.seat_labels().is_empty());
    }

    #[test]
    fn destinations_parse() {
        let body = r#"{"from": ["BER", "LIS"], "to": ["FRA"]}"#;
        let destinations: Destinations = serde_json::from_str(body).unwrap();
        assert_eq!(destinations.from, vec!["BER", "LIS"]);
        assert_eq!(destinations.to, vec!["FRA"]);
    }

    #[test]
    fn flight_parses_while_ignoring_extra_fields() {
        let body = r#"{
            "id": "f-1",
            "from": "BER",
            "to": "LIS",
            "departure": "2023-03-01T10:00:00Z",
            "arrival": "2023-03-01T13:00:00Z",
            "status": "scheduled"
        }"#;
        let flight: Flight = serde_json::from_str(body).unwrap();
        assert_eq!(flight.id, "f-1");
        assert_eq!(flight.status, "scheduled");
    }
}
