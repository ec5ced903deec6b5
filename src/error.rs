use crate::city::CityId;
use crate::time::Time;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("time window is inverted: {earliest} > {latest}")]
    InvertedWindow { earliest: Time, latest: Time },
    #[error("origin and destination are both city {0}")]
    SameCity(CityId),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read flights file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse flights JSON")]
    Json(#[from] serde_json::Error),
    #[error("flights file has no header line")]
    MissingHeader,
    #[error("malformed header line: {0:?}")]
    MalformedHeader(String),
    #[error("malformed flight on line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("flight on line {line} arrives before it departs")]
    ArrivalBeforeDeparture { line: usize },
    #[error("flight {index} arrives before it departs")]
    InvertedFlight { index: usize },
    #[error("header declares {expected} flights but only {found} were found")]
    Truncated { expected: usize, found: usize },
}
