use crate::city::CityId;
use crate::error::LoadError;
use crate::flight::{Fare, Flight, FlightId};
use crate::time::Time;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

pub struct Timetable {
    pub declared_cities: usize,
    pub flights: Vec<Flight>,
}

impl Timetable {
    /// Cities served by at least one flight, ascending.
    pub fn cities(&self) -> Vec<CityId> {
        self.flights
            .iter()
            .flat_map(|f| [f.origin_id, f.destination_id])
            .collect::<BTreeSet<CityId>>()
            .into_iter()
            .collect()
    }
}

pub fn load_from_file(path: &Path) -> Result<Timetable, LoadError> {
    let data = std::fs::read_to_string(path)?;
    let timetable = if path.extension().is_some_and(|ext| ext == "json") {
        parse_json_flights(&data)?
    } else {
        parse_flights(&data)?
    };
    info!(
        path = %path.display(),
        flights = timetable.flights.len(),
        cities = timetable.declared_cities,
        "loaded timetable"
    );
    Ok(timetable)
}

/// Parses a JSON array of flights. Ids are reassigned by position.
pub fn parse_json_flights(data: &str) -> Result<Timetable, LoadError> {
    let mut flights: Vec<Flight> = serde_json::from_str(data)?;
    for (index, flight) in flights.iter_mut().enumerate() {
        if flight.arrival_time < flight.departure_time {
            return Err(LoadError::InvertedFlight { index });
        }
        flight.id = FlightId(index);
    }
    let mut timetable = Timetable {
        declared_cities: 0,
        flights,
    };
    timetable.declared_cities = timetable.cities().len();
    Ok(timetable)
}

/// Parses `<cities> <flights>` followed by one `origin destination fare departure arrival`
/// line per flight.
pub fn parse_flights(data: &str) -> Result<Timetable, LoadError> {
    let mut lines = data
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let counts = header
        .split_whitespace()
        .map(|x| x.parse::<usize>())
        .collect::<Result<Vec<usize>, _>>()
        .map_err(|_| LoadError::MalformedHeader(header.to_string()))?;
    let &[declared_cities, expected] = counts.as_slice() else {
        return Err(LoadError::MalformedHeader(header.to_string()));
    };

    let mut flights = Vec::with_capacity(expected);
    for (line, content) in lines.take(expected) {
        let malformed = || LoadError::MalformedLine {
            line,
            content: content.to_string(),
        };
        let fields = content
            .split_whitespace()
            .map(|x| x.parse::<u64>())
            .collect::<Result<Vec<u64>, _>>()
            .map_err(|_| malformed())?;
        let &[origin, destination, fare, departure, arrival] = fields.as_slice() else {
            return Err(malformed());
        };
        if arrival < departure {
            return Err(LoadError::ArrivalBeforeDeparture { line });
        }
        let origin = u32::try_from(origin).map_err(|_| malformed())?;
        let destination = u32::try_from(destination).map_err(|_| malformed())?;

        flights.push(Flight {
            id: FlightId(flights.len()),
            origin_id: CityId(origin),
            destination_id: CityId(destination),
            departure_time: Time(departure),
            arrival_time: Time(arrival),
            fare: Fare(fare),
        });
    }

    if flights.len() < expected {
        return Err(LoadError::Truncated {
            expected,
            found: flights.len(),
        });
    }

    Ok(Timetable {
        declared_cities,
        flights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flights() {
        let data = "3 3\n1 2 100 0 10\n\n2 3 50 40 60\n1 3 200 0 70\n";
        let timetable = parse_flights(data).unwrap();

        assert_eq!(3, timetable.declared_cities);
        assert_eq!(3, timetable.flights.len());
        assert_eq!(
            Flight {
                id: FlightId(1),
                origin_id: CityId(2),
                destination_id: CityId(3),
                departure_time: Time(40),
                arrival_time: Time(60),
                fare: Fare(50),
            },
            timetable.flights[1]
        );
        assert_eq!(FlightId(2), timetable.flights[2].id);
        assert_eq!(vec![CityId(1), CityId(2), CityId(3)], timetable.cities());
    }

    #[test]
    fn test_empty_timetable() {
        let timetable = parse_flights("0 0\n").unwrap();
        assert!(timetable.flights.is_empty());
        assert!(timetable.cities().is_empty());
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(parse_flights("  \n\n"), Err(LoadError::MissingHeader)));
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(parse_flights("3\n"), Err(LoadError::MalformedHeader(_))));
        assert!(matches!(parse_flights("a b\n"), Err(LoadError::MalformedHeader(_))));
    }

    #[test]
    fn test_malformed_line() {
        let result = parse_flights("2 2\n1 2 100 0 10\n1 2 x 0 10\n");
        match result {
            Err(LoadError::MalformedLine { line, content }) => {
                assert_eq!(3, line);
                assert_eq!("1 2 x 0 10", content);
            }
            _ => panic!("expected a malformed line error"),
        }
        assert!(matches!(
            parse_flights("2 1\n1 2 100 0\n"),
            Err(LoadError::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_arrival_before_departure() {
        assert!(matches!(
            parse_flights("2 1\n1 2 100 50 10\n"),
            Err(LoadError::ArrivalBeforeDeparture { line: 2 })
        ));
    }

    #[test]
    fn test_truncated() {
        assert!(matches!(
            parse_flights("2 3\n1 2 100 0 10\n"),
            Err(LoadError::Truncated { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn test_parse_json_flights() {
        let data = r#"[
            {"id": 7, "origin_id": 1, "destination_id": 2, "departure_time": 0, "arrival_time": 10, "fare": 100},
            {"id": 7, "origin_id": 2, "destination_id": 3, "departure_time": 40, "arrival_time": 60, "fare": 50}
        ]"#;
        let timetable = parse_json_flights(data).unwrap();

        assert_eq!(3, timetable.declared_cities);
        assert_eq!(vec![FlightId(0), FlightId(1)], timetable.flights.iter().map(|f| f.id).collect::<Vec<_>>());
        assert_eq!(Fare(50), timetable.flights[1].fare);
    }

    #[test]
    fn test_json_arrival_before_departure() {
        let data = r#"[
            {"id": 0, "origin_id": 1, "destination_id": 2, "departure_time": 0, "arrival_time": 10, "fare": 10},
            {"id": 1, "origin_id": 1, "destination_id": 2, "departure_time": 100, "arrival_time": 50, "fare": 10}
        ]"#;
        assert!(matches!(
            parse_json_flights(data),
            Err(LoadError::InvertedFlight { index: 1 })
        ));
    }

    #[test]
    fn test_load_json_file() {
        let path = std::env::temp_dir().join(format!("skyroute-loader-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"id": 0, "origin_id": 1, "destination_id": 2, "departure_time": 100, "arrival_time": 50, "fare": 10}]"#,
        )
        .unwrap();
        let result = load_from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(LoadError::InvertedFlight { index: 0 })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_json_flights("[{\"id\": 0}]"), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_ignores_lines_past_declared_count() {
        let timetable = parse_flights("2 1\n1 2 100 0 10\n2 1 100 40 60\n").unwrap();
        assert_eq!(1, timetable.flights.len());
    }
}
