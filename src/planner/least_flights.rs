use crate::planner::keys::HopsArrival;
use crate::planner::planner::Planner;
use crate::planner::query::Query;
use crate::route::Route;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

#[derive(Clone, Copy)]
struct Step {
    flight: usize,
    parent: Option<usize>,
    hops: usize,
}

/// A flight reached at a given depth. The same flight may be queued again at a
/// different depth.
#[derive(Hash, PartialEq, Eq)]
struct Visit {
    flight: usize,
    hops: usize,
}

/// Breadth-first search for the route with the fewest flights, ties going to the
/// earliest final arrival.
pub(super) fn search(planner: &Planner, query: &Query) -> Route {
    let flights = planner.flights();
    let mut seeds = planner.departures(query).collect::<Vec<usize>>();
    if seeds.is_empty() {
        return Route::empty();
    }
    seeds.sort_by_key(|idx| flights[*idx].departure_time);

    // Every queued step lives here; parents point back into it
    let mut steps = seeds
        .iter()
        .map(|&flight| Step {
            flight,
            parent: None,
            hops: 1,
        })
        .collect::<Vec<Step>>();
    let mut queue = (0..steps.len()).collect::<VecDeque<usize>>();
    let mut visited: HashSet<Visit> = HashSet::new();
    let mut best: Option<(HopsArrival, usize)> = None;

    while let Some(step_idx) = queue.pop_front() {
        let Step { flight, hops, .. } = steps[step_idx];
        if best.is_some_and(|(key, _)| hops > key.hops) {
            continue;
        }

        let current = &flights[flight];
        if current.destination_id == query.to {
            let key = HopsArrival {
                hops,
                arrival: current.arrival_time,
            };
            if best.is_none_or(|(best_key, _)| key < best_key) {
                best = Some((key, step_idx));
            }
            continue;
        }

        for &next in planner.graph().connections(flight) {
            if flights[next].arrival_time > query.window.latest {
                continue;
            }
            if visited.insert(Visit {
                flight: next,
                hops: hops + 1,
            }) {
                steps.push(Step {
                    flight: next,
                    parent: Some(step_idx),
                    hops: hops + 1,
                });
                queue.push_back(steps.len() - 1);
            }
        }
    }

    debug!(
        seeds = seeds.len(),
        expanded = steps.len(),
        found = best.is_some(),
        "least flights search finished"
    );

    let Some((_, last)) = best else {
        return Route::empty();
    };
    let mut positions = vec![];
    let mut cursor = Some(last);
    while let Some(step_idx) = cursor {
        positions.push(steps[step_idx].flight);
        cursor = steps[step_idx].parent;
    }
    positions.reverse();
    planner.route_from(positions)
}
