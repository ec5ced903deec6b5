use crate::city::CityId;
use crate::error::QueryError;
use crate::time::{Time, TimeWindow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub from: CityId,
    pub to: CityId,
    pub window: TimeWindow,
}

impl Query {
    pub fn new(from: CityId, to: CityId, earliest: Time, latest: Time) -> Query {
        Query {
            from,
            to,
            window: TimeWindow::new(earliest, latest),
        }
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.window.is_inverted() {
            return Err(QueryError::InvertedWindow {
                earliest: self.window.earliest,
                latest: self.window.latest,
            });
        }
        if self.from == self.to {
            return Err(QueryError::SameCity(self.from));
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} within {}", self.from, self.to, self.window)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    LeastFlightsEarliest,
    Cheapest,
    LeastFlightsCheapest,
}

impl Objective {
    pub const ALL: [Objective; 3] = [
        Objective::LeastFlightsEarliest,
        Objective::Cheapest,
        Objective::LeastFlightsCheapest,
    ];
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Objective::LeastFlightsEarliest => "least flights, earliest arrival",
            Objective::Cheapest => "cheapest",
            Objective::LeastFlightsCheapest => "least flights, cheapest",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lf" | "least" => Ok(Objective::LeastFlightsEarliest),
            "c" | "cheap" | "cheapest" => Ok(Objective::Cheapest),
            "lfc" => Ok(Objective::LeastFlightsCheapest),
            other => Err(format!("unknown objective '{}', expected lf, c or lfc", other)),
        }
    }
}
