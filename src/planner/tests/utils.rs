use crate::city::CityId;
use crate::flight::{Fare, Flight, FlightId};
use crate::graph::MIN_LAYOVER;
use crate::time::Time;
use proptest::prelude::Strategy;

pub const A: CityId = CityId(1);
pub const B: CityId = CityId(2);
pub const C: CityId = CityId(3);
pub const D: CityId = CityId(4);

pub fn add_flight(
    flights: &mut Vec<Flight>,
    origin_id: CityId,
    destination_id: CityId,
    fare: u64,
    departure_time: u64,
    arrival_time: u64,
) {
    flights.push(Flight {
        id: FlightId(flights.len()),
        origin_id,
        destination_id,
        departure_time: Time(departure_time),
        arrival_time: Time(arrival_time),
        fare: Fare(fare),
    });
}

pub fn ids(flights: &[Flight]) -> Vec<usize> {
    flights.iter().map(|f| f.id.0).collect()
}

/// A->B->C is cheaper, A->C is direct.
pub fn triangle() -> Vec<Flight> {
    let mut flights = Vec::new();
    add_flight(&mut flights, A, B, 100, 0, 10);
    add_flight(&mut flights, B, C, 50, 40, 60);
    add_flight(&mut flights, A, C, 200, 0, 70);
    flights
}

/// Every itinerary from `from` that ends on its first landing at `to`, within `[t1, t2]`.
pub fn all_routes(flights: &[Flight], from: CityId, to: CityId, t1: u64, t2: u64) -> Vec<Vec<Flight>> {
    fn extend(flights: &[Flight], to: CityId, t2: u64, path: &mut Vec<Flight>, out: &mut Vec<Vec<Flight>>) {
        let Some(last) = path.last().copied() else {
            return;
        };
        if last.destination_id == to {
            out.push(path.clone());
            return;
        }
        for next in flights {
            if last.connects_to(next, MIN_LAYOVER) && next.arrival_time <= Time(t2) {
                path.push(*next);
                extend(flights, to, t2, path, out);
                path.pop();
            }
        }
    }

    let mut out = vec![];
    for flight in flights {
        if flight.origin_id == from && flight.departure_time >= Time(t1) && flight.arrival_time <= Time(t2) {
            extend(flights, to, t2, &mut vec![*flight], &mut out);
        }
    }
    out
}

pub fn fare_of(route: &[Flight]) -> Fare {
    route.iter().map(|f| f.fare).sum()
}

pub fn arb_city() -> impl Strategy<Value = CityId> {
    (1..=4u32).prop_map(CityId)
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (arb_city(), arb_city(), 0..500u64, 0..120u64, 0..300u64).prop_map(|(org, dst, dep, dur, fare)| Flight {
        id: FlightId(0),
        origin_id: org,
        destination_id: dst,
        departure_time: Time(dep),
        arrival_time: Time(dep) + dur,
        fare: Fare(fare),
    })
}

pub fn number(mut flights: Vec<Flight>) -> Vec<Flight> {
    flights.iter_mut().enumerate().for_each(|(idx, f)| f.id = FlightId(idx));
    flights
}
