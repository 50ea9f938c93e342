use chrono::{DateTime, Utc};
use thiserror::Error;

/// Post search criteria rejected before any query runs.
///
/// The validator stops at the first violation, so a request with several problems reports
/// only one of them.
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("invalid user_id {0}: must be greater than 0")]
    InvalidUserId(i32),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid sort_by: {0}")]
    InvalidSortField(String),

    #[error("invalid sort_order: {0} (must be 'asc' or 'desc')")]
    InvalidSortDirection(String),

    #[error("invalid min_license_level: {0}")]
    InvalidMinLicenseLevel(String),

    #[error("invalid license level: {0}")]
    InvalidLicenseLevel(String),

    #[error("min_irating ({min}) cannot be greater than max_irating ({max})")]
    InvertedIratingRange { min: i32, max: i32 },

    #[error("{field} cannot be negative")]
    NegativeIrating { field: &'static str },

    #[error("event_start_from ({from}) cannot be after event_start_to ({to})")]
    InvertedDateRange {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}
