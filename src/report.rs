use crate::city::CityId;
use crate::flight::Fare;
use crate::planner::{Objective, Planner, Query};
use crate::time::{Time, TimeWindow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::info;

pub const DEFAULT_SEED: u64 = 13;
pub const DEFAULT_PAIRS: usize = 20;

/// Draws up to `count` distinct ordered pairs of different cities.
pub fn sample_city_pairs(cities: &[CityId], count: usize, seed: u64) -> Vec<(CityId, CityId)> {
    let pairs = cities
        .iter()
        .flat_map(|from| cities.iter().map(move |to| (*from, *to)))
        .filter(|(from, to)| from != to)
        .collect::<Vec<(CityId, CityId)>>();

    let mut rng = StdRng::seed_from_u64(seed);
    pairs
        .choose_multiple(&mut rng, count.min(pairs.len()))
        .copied()
        .collect()
}

pub struct PairReport {
    pub from: CityId,
    pub to: CityId,
    pub least_flights: Option<(usize, Time)>,
    pub cheapest: Option<Fare>,
    pub least_flights_cheapest: Option<(usize, Fare)>,
    pub elapsed: Duration,
}

pub fn evaluate(planner: &Planner, from: CityId, to: CityId, window: TimeWindow) -> PairReport {
    let started = Instant::now();
    let query = Query { from, to, window };
    let mut report = PairReport {
        from,
        to,
        least_flights: None,
        cheapest: None,
        least_flights_cheapest: None,
        elapsed: Duration::ZERO,
    };

    for objective in Objective::ALL {
        let route = planner.plan(&query, objective).unwrap_or_default();
        if route.is_empty() {
            continue;
        }
        match objective {
            Objective::LeastFlightsEarliest => {
                report.least_flights = route.arrival_time().map(|arrival| (route.len(), arrival))
            }
            Objective::Cheapest => report.cheapest = Some(route.total_fare()),
            Objective::LeastFlightsCheapest => {
                report.least_flights_cheapest = Some((route.len(), route.total_fare()))
            }
        }
    }
    report.elapsed = started.elapsed();
    report
}

pub fn write_report<W: Write>(
    planner: &Planner,
    pairs: &[(CityId, CityId)],
    window: TimeWindow,
    out: &mut W,
) -> io::Result<Duration> {
    let started = Instant::now();
    for (from, to) in pairs {
        let report = evaluate(planner, *from, *to, window);
        info!(%from, %to, elapsed_ms = report.elapsed.as_millis() as u64, "pair evaluated");
        writeln!(out, "{}", report)?;
        out.flush()?;
    }
    let total = started.elapsed();
    writeln!(out, "Total time for {} pairs: {:.2} seconds", pairs.len(), total.as_secs_f64())?;
    out.flush()?;
    Ok(total)
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Routes from city {} to city {}", self.from, self.to)?;
        match self.least_flights {
            Some((hops, arrival)) => writeln!(
                f,
                "  {}: {} flights, arrives {}",
                Objective::LeastFlightsEarliest,
                hops,
                arrival
            )?,
            None => writeln!(f, "  {}: no route", Objective::LeastFlightsEarliest)?,
        }
        match self.cheapest {
            Some(fare) => writeln!(f, "  {}: total fare {}", Objective::Cheapest, fare)?,
            None => writeln!(f, "  {}: no route", Objective::Cheapest)?,
        }
        match self.least_flights_cheapest {
            Some((hops, fare)) => writeln!(
                f,
                "  {}: {} flights, total fare {}",
                Objective::LeastFlightsCheapest,
                hops,
                fare
            )?,
            None => writeln!(f, "  {}: no route", Objective::LeastFlightsCheapest)?,
        }
        write!(f, "  time taken: {:.2} seconds", self.elapsed.as_secs_f64())
    }
}
