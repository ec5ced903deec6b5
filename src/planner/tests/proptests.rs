use crate::city::CityId;
use crate::flight::Flight;
use crate::graph::MIN_LAYOVER;
use crate::planner::planner::Planner;
use crate::planner::tests::utils::{all_routes, arb_city, arb_flight, fare_of, number};
use crate::time::Time;
use proptest::prelude::*;
use proptest::proptest;

fn assert_valid(route: &[Flight], from: CityId, to: CityId, t1: u64, t2: u64) -> Result<(), TestCaseError> {
    if let (Some(first), Some(last)) = (route.first(), route.last()) {
        prop_assert_eq!(first.origin_id, from);
        prop_assert_eq!(last.destination_id, to);
        prop_assert!(first.departure_time >= Time(t1));
        prop_assert!(route.iter().all(|f| f.arrival_time <= Time(t2)));
        for pair in route.windows(2) {
            prop_assert!(
                pair[0].connects_to(&pair[1], MIN_LAYOVER),
                "\nBroken connection:\nFlight {} (lands {} at {}) vs Flight {} (departs {} at {})",
                pair[0].id, pair[0].destination_id, pair[0].arrival_time,
                pair[1].id, pair[1].origin_id, pair[1].departure_time
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn test_routes_are_optimal(
        flights in prop::collection::vec(arb_flight(), 0..12),
        from in arb_city(),
        to in arb_city(),
        t1 in 0..200u64,
        span in 0..700u64,
    ) {
        let flights = number(flights);
        let t2 = t1 + span;
        let planner = Planner::new(flights.clone());

        let least = planner.least_flights_earliest_route(from, to, Time(t1), Time(t2));
        let cheapest = planner.cheapest_route(from, to, Time(t1), Time(t2));
        let least_cheapest = planner.least_flights_cheapest_route(from, to, Time(t1), Time(t2));

        assert_valid(least.flights(), from, to, t1, t2)?;
        assert_valid(cheapest.flights(), from, to, t1, t2)?;
        assert_valid(least_cheapest.flights(), from, to, t1, t2)?;

        let candidates = if from == to { vec![] } else { all_routes(&flights, from, to, t1, t2) };

        prop_assert_eq!(candidates.is_empty(), least.is_empty());
        prop_assert_eq!(candidates.is_empty(), cheapest.is_empty());
        prop_assert_eq!(candidates.is_empty(), least_cheapest.is_empty());

        if !candidates.is_empty() {
            let best_hops_arrival = candidates.iter()
                .map(|r| (r.len(), r[r.len() - 1].arrival_time))
                .min();
            prop_assert_eq!(best_hops_arrival, Some((least.len(), least.arrival_time().unwrap_or(Time(0)))));

            let best_fare = candidates.iter().map(|r| fare_of(r)).min();
            prop_assert_eq!(best_fare, Some(cheapest.total_fare()));

            let best_hops_fare = candidates.iter().map(|r| (r.len(), fare_of(r))).min();
            prop_assert_eq!(best_hops_fare, Some((least_cheapest.len(), least_cheapest.total_fare())));
        }
    }

    #[test]
    fn test_queries_are_idempotent(
        flights in prop::collection::vec(arb_flight(), 0..12),
        from in arb_city(),
        to in arb_city(),
    ) {
        let planner = Planner::new(number(flights));

        prop_assert_eq!(
            planner.least_flights_earliest_route(from, to, Time(0), Time::MAX),
            planner.least_flights_earliest_route(from, to, Time(0), Time::MAX)
        );
        prop_assert_eq!(
            planner.cheapest_route(from, to, Time(0), Time::MAX),
            planner.cheapest_route(from, to, Time(0), Time::MAX)
        );
        prop_assert_eq!(
            planner.least_flights_cheapest_route(from, to, Time(0), Time::MAX),
            planner.least_flights_cheapest_route(from, to, Time(0), Time::MAX)
        );
    }
}
