use crate::structs::Bound;
use thiserror::Error;

/// Failure talking to the screener backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Row numbers are 1-based, as displayed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("row {row}: {bound} is not a number")]
    InvalidBound { row: usize, bound: Bound },
    #[error("row {row}: minimum {min} is greater than maximum {max}")]
    InvalidRange { row: usize, min: f64, max: f64 },
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output was not valid utf-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("csv writer could not be flushed: {0}")]
    Flush(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = SearchError::InvalidRange {
            row: 2,
            min: 50.0,
            max: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "row 2: minimum 50 is greater than maximum 10"
        );
    }

    #[test]
    fn test_invalid_bound_message() {
        let err = SearchError::InvalidBound {
            row: 1,
            bound: Bound::Min,
        };
        assert_eq!(err.to_string(), "row 1: minimum is not a number");
    }

    #[test]
    fn test_fetch_error_is_transparent_in_search_error() {
        let err: SearchError = FetchError::Status(502).into();
        assert_eq!(err.to_string(), "server responded with status 502");
    }

    #[test]
    fn test_serde_error_becomes_decode() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
