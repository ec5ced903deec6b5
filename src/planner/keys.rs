use crate::flight::{Fare, Flight};
use crate::time::Time;
use std::cmp::Ordering;

/// Accumulated cost of a partial route, as ordered by a cost-based search.
pub trait PathCost: Ord + Copy {
    /// Cost of a route made of `flight` alone.
    fn seed(flight: &Flight) -> Self;

    /// Cost after boarding `next` at the end of the route.
    fn extend(self, next: &Flight) -> Self;
}

impl PathCost for Fare {
    fn seed(flight: &Flight) -> Self {
        flight.fare
    }

    fn extend(self, next: &Flight) -> Self {
        self + next.fare
    }
}

/// Fewer flights first, then the earlier final arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopsArrival {
    pub hops: usize,
    pub arrival: Time,
}

impl Ord for HopsArrival {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hops
            .cmp(&other.hops)
            .then_with(|| self.arrival.cmp(&other.arrival))
    }
}

impl PartialOrd for HopsArrival {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fewer flights first, then the lower total fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopsFare {
    pub hops: usize,
    pub fare: Fare,
}

impl Ord for HopsFare {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hops
            .cmp(&other.hops)
            .then_with(|| self.fare.cmp(&other.fare))
    }
}

impl PartialOrd for HopsFare {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathCost for HopsFare {
    fn seed(flight: &Flight) -> Self {
        HopsFare {
            hops: 1,
            fare: flight.fare,
        }
    }

    fn extend(self, next: &Flight) -> Self {
        HopsFare {
            hops: self.hops + 1,
            fare: self.fare + next.fare,
        }
    }
}
