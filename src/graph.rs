use crate::city::CityId;
use crate::flight::Flight;
use std::collections::HashMap;
use tracing::debug;

pub const MIN_LAYOVER: u64 = 20;

/// Which flights each flight can connect into, indexed by position in the flight slice
/// the graph was built from.
#[derive(Debug, Default)]
pub struct ConnectionGraph {
    connections: Vec<Vec<usize>>,
}

impl ConnectionGraph {
    pub fn build(flights: &[Flight], min_layover: u64) -> ConnectionGraph {
        let mut departures: HashMap<CityId, Vec<usize>> = HashMap::new();
        flights
            .iter()
            .enumerate()
            .for_each(|(idx, f)| departures.entry(f.origin_id).or_default().push(idx));

        let connections = flights
            .iter()
            .map(|flight| {
                departures
                    .get(&flight.destination_id)
                    .map(|candidates| {
                        candidates
                            .iter()
                            .copied()
                            .filter(|next| flight.connects_to(&flights[*next], min_layover))
                            .collect::<Vec<usize>>()
                    })
                    .unwrap_or_default()
            })
            .collect::<Vec<Vec<usize>>>();

        let graph = ConnectionGraph { connections };
        debug!(
            flights = flights.len(),
            cities = departures.len(),
            connections = graph.edge_count(),
            min_layover,
            "connection graph built"
        );
        graph
    }

    pub fn connections(&self, flight: usize) -> &[usize] {
        self.connections
            .get(flight)
            .map(|c| c.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.connections.iter().map(|c| c.len()).sum()
    }
}
