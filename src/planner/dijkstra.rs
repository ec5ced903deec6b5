use crate::heap::PriorityQueue;
use crate::planner::keys::PathCost;
use crate::planner::planner::Planner;
use crate::planner::query::Query;
use crate::route::Route;
use tracing::debug;

/// Dijkstra over flights, minimising `C` from any qualifying departure to the
/// destination city.
///
/// The queue has no decrease-key, so improved costs are pushed again and stale
/// entries are dropped when popped. The search always runs until the queue is
/// empty; the answer is then the cheapest flight landing at the destination.
pub(super) fn search<C: PathCost>(planner: &Planner, query: &Query) -> Route {
    let flights = planner.flights();
    let graph = planner.graph();

    let mut costs: Vec<Option<C>> = vec![None; flights.len()];
    let mut previous: Vec<Option<usize>> = vec![None; flights.len()];
    let mut finalized = vec![false; flights.len()];
    let mut queue = PriorityQueue::with_capacity(flights.len());

    for seed in planner.departures(query) {
        let cost = C::seed(&flights[seed]);
        costs[seed] = Some(cost);
        queue.enqueue(cost, seed);
    }
    if queue.is_empty() {
        return Route::empty();
    }

    let mut settled = 0usize;
    while let Some((cost, flight)) = queue.dequeue() {
        if finalized[flight] || costs[flight].is_some_and(|known| known < cost) {
            continue;
        }
        finalized[flight] = true;
        settled += 1;

        // Continuing past the destination can only add flights and fare
        if flights[flight].destination_id == query.to {
            continue;
        }

        for &next in graph.connections(flight) {
            let target = &flights[next];
            if finalized[next] || target.arrival_time > query.window.latest {
                continue;
            }
            let candidate = cost.extend(target);
            if costs[next].is_none_or(|known| candidate < known) {
                costs[next] = Some(candidate);
                previous[next] = Some(flight);
                queue.enqueue(candidate, next);
            }
        }
    }

    let terminal = flights
        .iter()
        .enumerate()
        .filter(|(_, f)| f.destination_id == query.to)
        .filter_map(|(idx, _)| costs[idx].map(|cost| (cost, idx)))
        .min_by(|a, b| a.0.cmp(&b.0));

    debug!(settled, found = terminal.is_some(), "cost search finished");

    let Some((_, last)) = terminal else {
        return Route::empty();
    };
    let mut positions = vec![];
    let mut cursor = Some(last);
    while let Some(flight) = cursor {
        positions.push(flight);
        cursor = previous[flight];
    }
    positions.reverse();
    planner.route_from(positions)
}
