use crate::flight::{Fare, Flight};
use crate::time::Time;
use std::fmt;

/// Ordered chain of connecting flights. Empty when no itinerary was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    flights: Vec<Flight>,
}

impl Route {
    pub fn new(flights: Vec<Flight>) -> Route {
        Route { flights }
    }

    pub fn empty() -> Route {
        Route::default()
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn total_fare(&self) -> Fare {
        self.flights.iter().map(|f| f.fare).sum()
    }

    pub fn departure_time(&self) -> Option<Time> {
        self.flights.first().map(|f| f.departure_time)
    }

    pub fn arrival_time(&self) -> Option<Time> {
        self.flights.last().map(|f| f.arrival_time)
    }

    pub fn duration(&self) -> Option<u64> {
        self.departure_time()
            .zip(self.arrival_time())
            .map(|(dep, arr)| arr - dep)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.flights.first(), self.arrival_time()) {
            (Some(first), Some(arrival)) => {
                write!(f, "{}", first.origin_id)?;
                for flight in &self.flights {
                    write!(f, " -> {}", flight.destination_id)?;
                }
                write!(
                    f,
                    " ({} flights, departs {}, arrives {}, fare {})",
                    self.len(),
                    first.departure_time,
                    arrival,
                    self.total_fare()
                )
            }
            _ => write!(f, "no route"),
        }
    }
}
