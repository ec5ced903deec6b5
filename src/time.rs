use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, Serialize, Deserialize, PartialOrd)]
pub struct Time(pub u64);

impl Time {
    pub const MAX: Time = Time(u64::MAX);

    /// Earliest moment a connecting flight may leave after landing at `self`.
    pub fn after_layover(self, layover: u64) -> Time {
        Time(self.0.saturating_add(layover))
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<u64> for Time {
    type Output = Self;

    fn add(self, rhs: u64) -> Self::Output {
        Time(self.0.saturating_add(rhs))
    }
}

impl Sub<Time> for Time {
    type Output = u64;

    fn sub(self, rhs: Time) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub earliest: Time,
    pub latest: Time,
}

impl TimeWindow {
    pub fn new(earliest: Time, latest: Time) -> Self {
        TimeWindow { earliest, latest }
    }

    pub fn unbounded() -> Self {
        TimeWindow::new(Time(0), Time::MAX)
    }

    pub fn is_inverted(&self) -> bool {
        self.earliest > self.latest
    }

    pub fn contains(&self, departure_time: Time, arrival_time: Time) -> bool {
        departure_time >= self.earliest && arrival_time <= self.latest
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.earliest, self.latest)
    }
}
