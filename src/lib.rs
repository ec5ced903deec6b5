//! Route planning over a fixed timetable of scheduled flights.
//!
//! A [`Planner`] links every flight to the flights that can be boarded after it,
//! given a minimum layover, and answers three kinds of query over a departure /
//! arrival window: fewest flights with earliest arrival, cheapest total fare, and
//! fewest flights with cheapest fare.

pub mod city;
pub mod error;
pub mod flight;
pub mod graph;
pub mod heap;
pub mod loader;
pub mod planner;
pub mod report;
pub mod route;
pub mod time;

pub use city::CityId;
pub use error::{LoadError, QueryError};
pub use flight::{Fare, Flight, FlightId};
pub use planner::{Objective, Planner, PlannerConfig, Query};
pub use route::Route;
pub use time::{Time, TimeWindow};
