mod dijkstra;
mod keys;
mod least_flights;
pub mod planner;
pub mod query;


pub use keys::{HopsArrival, HopsFare, PathCost};
pub use planner::{Planner, PlannerConfig};
pub use query::{Objective, Query};
