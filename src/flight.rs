use crate::city::CityId;
use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlightId(pub usize);

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fare(pub u64);

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Self::Output {
        Fare(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Self {
        iter.fold(Fare::default(), |acc, fare| acc + fare)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Flight {
    #[tabled(rename = "flight")]
    pub id: FlightId,
    #[tabled(rename = "from")]
    pub origin_id: CityId,
    #[tabled(rename = "to")]
    pub destination_id: CityId,
    #[tabled(rename = "departs")]
    pub departure_time: Time,
    #[tabled(rename = "arrives")]
    pub arrival_time: Time,
    pub fare: Fare,
}

impl Flight {
    /// Whether `next` can be boarded after this flight lands, given `min_layover` units on the ground.
    pub fn connects_to(&self, next: &Flight, min_layover: u64) -> bool {
        self.destination_id == next.origin_id
            && next.departure_time >= self.arrival_time.after_layover(min_layover)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}->{} dep {} arr {} fare {}",
            self.id, self.origin_id, self.destination_id, self.departure_time, self.arrival_time, self.fare
        )
    }
}
