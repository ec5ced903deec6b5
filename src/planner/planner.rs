use crate::city::CityId;
use crate::error::QueryError;
use crate::flight::{Fare, Flight};
use crate::graph::{ConnectionGraph, MIN_LAYOVER};
use crate::planner::keys::HopsFare;
use crate::planner::query::{Objective, Query};
use crate::planner::{dijkstra, least_flights};
use crate::route::Route;
use crate::time::Time;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub min_layover: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            min_layover: MIN_LAYOVER,
        }
    }
}

/// Owns a fixed set of flights and the connections between them.
///
/// Queries only read the planner, so one instance can serve any number of them,
/// including from several threads at once.
pub struct Planner {
    flights: Vec<Flight>,
    graph: ConnectionGraph,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(flights: Vec<Flight>) -> Planner {
        Planner::with_config(flights, PlannerConfig::default())
    }

    pub fn with_config(flights: Vec<Flight>, config: PlannerConfig) -> Planner {
        let graph = ConnectionGraph::build(&flights, config.min_layover);
        Planner {
            flights,
            graph,
            config,
        }
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Runs `query` for `objective`. An invalid query is an error; an unreachable
    /// destination is an empty route.
    pub fn plan(&self, query: &Query, objective: Objective) -> Result<Route, QueryError> {
        query.validate().inspect_err(|e| {
            warn!(%query, %objective, error = %e, "rejected query");
        })?;

        let route = match objective {
            Objective::LeastFlightsEarliest => least_flights::search(self, query),
            Objective::Cheapest => dijkstra::search::<Fare>(self, query),
            Objective::LeastFlightsCheapest => dijkstra::search::<HopsFare>(self, query),
        };
        debug!(%query, %objective, %route, "query answered");

        #[cfg(debug_assertions)]
        self.assert_route(query, &route);

        Ok(route)
    }

    pub fn least_flights_earliest_route(&self, from: CityId, to: CityId, t1: Time, t2: Time) -> Route {
        self.plan(&Query::new(from, to, t1, t2), Objective::LeastFlightsEarliest)
            .unwrap_or_default()
    }

    pub fn cheapest_route(&self, from: CityId, to: CityId, t1: Time, t2: Time) -> Route {
        self.plan(&Query::new(from, to, t1, t2), Objective::Cheapest)
            .unwrap_or_default()
    }

    pub fn least_flights_cheapest_route(&self, from: CityId, to: CityId, t1: Time, t2: Time) -> Route {
        self.plan(&Query::new(from, to, t1, t2), Objective::LeastFlightsCheapest)
            .unwrap_or_default()
    }

    /// Positions of the flights a route for `query` may start with.
    pub(super) fn departures<'a>(&'a self, query: &'a Query) -> impl Iterator<Item = usize> + 'a {
        self.flights
            .iter()
            .enumerate()
            .filter(|(_, f)| {
                f.origin_id == query.from && query.window.contains(f.departure_time, f.arrival_time)
            })
            .map(|(idx, _)| idx)
    }

    pub(super) fn route_from(&self, positions: impl IntoIterator<Item = usize>) -> Route {
        Route::new(positions.into_iter().map(|idx| self.flights[idx]).collect())
    }

    #[cfg(debug_assertions)]
    fn assert_route(&self, query: &Query, route: &Route) {
        let flights = route.flights();
        if let (Some(first), Some(last)) = (flights.first(), flights.last()) {
            debug_assert_eq!(first.origin_id, query.from, "Route origin <-> query origin violated");
            debug_assert_eq!(
                last.destination_id, query.to,
                "Route destination <-> query destination violated"
            );
            debug_assert!(
                first.departure_time >= query.window.earliest,
                "Route departs before the time window"
            );
            debug_assert!(
                flights.iter().all(|f| f.arrival_time <= query.window.latest),
                "Route arrives after the time window"
            );
            debug_assert!(
                flights
                    .windows(2)
                    .all(|fs| fs[0].connects_to(&fs[1], self.config.min_layover)),
                "Route connection continuity violated"
            );
        }
    }
}
